//! Raw-mode switching and its RAII guard.
//!
//! Raw mode is held only while a key is being read. [`RawModeGuard`] enters
//! it on construction and puts the saved settings back when dropped, so
//! every exit path out of a read (normal return, `?` on a source error, an
//! abandoned escape sequence, a panic) restores the terminal exactly once.

// Rust guideline compliant 2026-02

use std::fmt;
use std::io;

/// Something that can put the input side of a terminal into raw mode and
/// back.
pub trait ModeSwitch {
    /// Save the current settings and switch to raw input.
    fn enter_raw(&mut self) -> io::Result<()>;

    /// Put back the settings saved by the last [`ModeSwitch::enter_raw`].
    ///
    /// Calling this without a preceding `enter_raw` is a no-op.
    fn restore(&mut self) -> io::Result<()>;
}

impl<M: ModeSwitch + ?Sized> ModeSwitch for &mut M {
    fn enter_raw(&mut self) -> io::Result<()> {
        (**self).enter_raw()
    }

    fn restore(&mut self) -> io::Result<()> {
        (**self).restore()
    }
}

/// termios-based raw mode on stdin.
///
/// Only canonical line buffering and echo are turned off, with reads
/// returning after a single byte. Signals and output processing are left
/// alone so Ctrl+C still works and `\n` still moves to column 0.
///
/// When stdin is not a TTY (piped input, tests) both operations do nothing.
#[derive(Default)]
pub struct Termios {
    /// Settings captured by `enter_raw`, consumed by `restore`.
    saved: Option<libc::termios>,
}

impl Termios {
    /// Handle for stdin; nothing is changed until [`ModeSwitch::enter_raw`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether settings are currently saved (raw mode active).
    pub fn is_raw(&self) -> bool {
        self.saved.is_some()
    }
}

impl fmt::Debug for Termios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Termios")
            .field("raw", &self.is_raw())
            .finish()
    }
}

fn stdin_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

impl ModeSwitch for Termios {
    fn enter_raw(&mut self) -> io::Result<()> {
        if self.saved.is_some() || !stdin_is_tty() {
            return Ok(());
        }

        // SAFETY: termios is plain old data; tcgetattr fully initializes it
        // on success and we bail out on failure.
        let mut original: libc::termios = unsafe { std::mem::zeroed() };
        // SAFETY: `original` is a valid, writable termios.
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut original) } != 0 {
            return Err(io::Error::last_os_error());
        }

        let mut settings = original;
        settings.c_lflag &= !(libc::ICANON | libc::ECHO);
        settings.c_cc[libc::VMIN] = 1;
        settings.c_cc[libc::VTIME] = 0;

        // SAFETY: `settings` is a fully initialized termios copied from the
        // current settings.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &settings) } != 0 {
            return Err(io::Error::last_os_error());
        }
        self.saved = Some(original);
        log::trace!("stdin raw mode on");
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        let Some(original) = self.saved.take() else {
            return Ok(());
        };
        // SAFETY: `original` came from tcgetattr on the same descriptor.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &original) } != 0 {
            return Err(io::Error::last_os_error());
        }
        log::trace!("stdin raw mode off");
        Ok(())
    }
}

/// Holds raw mode for its lifetime.
///
/// # Example
///
/// ```ignore
/// fn read_one(mode: &mut Termios, decoder: &mut KeyDecoder<StdinSource>) -> io::Result<KeyEvent> {
///     let _guard = RawModeGuard::acquire(mode)?;
///     // Terminal is restored when `_guard` goes out of scope, on every path.
///     decoder.decode()
/// }
/// ```
#[derive(Debug)]
pub struct RawModeGuard<M: ModeSwitch> {
    mode: M,
}

impl<M: ModeSwitch> RawModeGuard<M> {
    /// Enter raw mode. If that fails, nothing is held and nothing will be
    /// restored.
    pub fn acquire(mut mode: M) -> io::Result<Self> {
        mode.enter_raw()?;
        Ok(Self { mode })
    }
}

impl<M: ModeSwitch> Drop for RawModeGuard<M> {
    fn drop(&mut self) {
        if let Err(e) = self.mode.restore() {
            log::warn!("failed to restore terminal mode: {e}");
        }
    }
}
