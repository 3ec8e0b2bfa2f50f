//! Byte sources feeding the key decoder.
//!
//! A [`ByteSource`] hands out one byte at a time and can say how many bytes
//! are already queued without blocking. The decoder needs nothing else from
//! the terminal.
//!
//! - [`StdinSource`] reads fd 0 directly with `libc::read` and counts queued
//!   bytes with `ioctl(FIONREAD)`.
//! - [`ScriptedSource`] replays an in-memory byte queue, for tests and for
//!   decoding recorded input.

// Rust guideline compliant 2026-02

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::constants::DEFAULT_SAMPLE_DELAY;

/// Blocking byte reader plus a non-blocking "bytes ready" oracle.
pub trait ByteSource {
    /// Read exactly one byte, blocking until it arrives.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Number of bytes that can be read right now without blocking.
    ///
    /// The count is only a hint. A source that cannot tell may report 0.
    fn available(&mut self) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<u8> {
        (**self).read_byte()
    }

    fn available(&mut self) -> io::Result<usize> {
        (**self).available()
    }
}

/// Reads the process's standard input, byte by byte.
///
/// We bypass `std::io::stdin()` on purpose: its internal `BufReader` pulls
/// bytes out of the kernel queue, after which `FIONREAD` no longer sees them
/// and a buffered escape sequence would look like a lone ESC.
#[derive(Debug)]
pub struct StdinSource {
    /// Pause before sampling the queue so a sequence in flight can land.
    sample_delay: Duration,
}

impl StdinSource {
    /// Stdin source with the default sampling delay.
    pub fn new() -> Self {
        Self::with_sample_delay(DEFAULT_SAMPLE_DELAY)
    }

    /// Stdin source that waits `sample_delay` before each availability count.
    pub fn with_sample_delay(sample_delay: Duration) -> Self {
        Self { sample_delay }
    }

    /// Delay applied before each availability count.
    pub fn sample_delay(&self) -> Duration {
        self.sample_delay
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = 0u8;
        loop {
            // SAFETY: `byte` is a valid, writable one-byte buffer for the
            // duration of the call.
            let n = unsafe {
                libc::read(
                    libc::STDIN_FILENO,
                    std::ptr::addr_of_mut!(byte).cast::<libc::c_void>(),
                    1,
                )
            };
            match n {
                1 => {
                    log::trace!("stdin byte 0x{byte:02x}");
                    return Ok(byte);
                }
                0 => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "stdin closed",
                    ));
                }
                _ => {
                    let err = io::Error::last_os_error();
                    if err.kind() == io::ErrorKind::Interrupted {
                        continue;
                    }
                    log::error!("stdin read error: {err}");
                    return Err(err);
                }
            }
        }
    }

    fn available(&mut self) -> io::Result<usize> {
        if !self.sample_delay.is_zero() {
            std::thread::sleep(self.sample_delay);
        }

        let mut count: libc::c_int = 0;
        // SAFETY: FIONREAD writes a single c_int through the provided
        // pointer, which points at `count`.
        let rc = unsafe {
            libc::ioctl(
                libc::STDIN_FILENO,
                libc::FIONREAD,
                std::ptr::addr_of_mut!(count),
            )
        };
        if rc != 0 {
            // Devices such as /dev/zero read fine but cannot count; no
            // count means a lone ESC, never a failed read.
            log::debug!("FIONREAD on stdin failed: {}", io::Error::last_os_error());
            return Ok(0);
        }
        Ok(count.max(0) as usize)
    }
}

/// In-memory byte queue.
///
/// By default [`ByteSource::available`] reports everything still queued, the
/// same as a terminal that delivered the whole script at once. A fixed
/// report can be forced with [`ScriptedSource::reporting`] to model a
/// terminal that says more (or less) is buffered than the script holds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
    reported: Option<usize>,
}

impl ScriptedSource {
    /// Queue `bytes` for reading.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: bytes.as_ref().iter().copied().collect(),
            reported: None,
        }
    }

    /// Always report `count` from [`ByteSource::available`].
    #[must_use]
    pub fn reporting(mut self, count: usize) -> Self {
        self.reported = Some(count);
        self
    }

    /// Append more bytes to the end of the queue.
    pub fn push(&mut self, bytes: impl AsRef<[u8]>) {
        self.bytes.extend(bytes.as_ref());
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> io::Result<u8> {
        self.bytes.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }

    fn available(&mut self) -> io::Result<usize> {
        Ok(self.reported.unwrap_or(self.bytes.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reads_in_order() {
        let mut src = ScriptedSource::new(b"ab");
        assert_eq!(src.read_byte().unwrap(), b'a');
        assert_eq!(src.read_byte().unwrap(), b'b');
    }

    #[test]
    fn test_scripted_eof() {
        let mut src = ScriptedSource::new(b"");
        let err = src.read_byte().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_scripted_available_tracks_queue() {
        let mut src = ScriptedSource::new(b"\x1b[A");
        assert_eq!(src.available().unwrap(), 3);
        src.read_byte().unwrap();
        assert_eq!(src.available().unwrap(), 2);
        src.push(b"xy");
        assert_eq!(src.available().unwrap(), 4);
        assert_eq!(src.remaining(), 4);
    }

    #[test]
    fn test_scripted_reporting_override() {
        let mut src = ScriptedSource::new(b"\x1bX").reporting(3);
        assert_eq!(src.available().unwrap(), 3);
        src.read_byte().unwrap();
        assert_eq!(src.available().unwrap(), 3);
    }

    #[test]
    fn test_stdin_sample_delay() {
        assert_eq!(StdinSource::new().sample_delay(), DEFAULT_SAMPLE_DELAY);
        let src = StdinSource::with_sample_delay(Duration::ZERO);
        assert!(src.sample_delay().is_zero());
    }
}
