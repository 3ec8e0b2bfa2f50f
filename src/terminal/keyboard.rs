//! Keyboard: a key decoder whose reads happen in raw mode.
//!
//! Each public read acquires a [`RawModeGuard`] for exactly the duration of
//! that read. Between reads the terminal is in whatever mode the user had,
//! so ordinary line-buffered output and input keep working.

// Rust guideline compliant 2026-02

use std::io;
use std::time::Duration;

use super::guard::{ModeSwitch, RawModeGuard, Termios};
use crate::config::Config;
use crate::input::{ByteSource, KeyDecoder, StdinSource};
use crate::key::KeyEvent;

/// Couples a [`KeyDecoder`] with the terminal mode it needs.
#[derive(Debug)]
pub struct Keyboard<S, M> {
    decoder: KeyDecoder<S>,
    mode: M,
}

impl Keyboard<StdinSource, Termios> {
    /// Keyboard on the process's stdin, sampling with the configured delay.
    pub fn stdin(config: &Config) -> Self {
        let delay = Duration::from_micros(config.sample_delay_us);
        Self::new(StdinSource::with_sample_delay(delay), Termios::new())
    }
}

impl<S: ByteSource, M: ModeSwitch> Keyboard<S, M> {
    /// Keyboard over any byte source and mode switch.
    pub fn new(source: S, mode: M) -> Self {
        Self {
            decoder: KeyDecoder::new(source),
            mode,
        }
    }

    /// Block until a key is pressed and decode it.
    pub fn read_key(&mut self) -> io::Result<KeyEvent> {
        let _guard = RawModeGuard::acquire(&mut self.mode)?;
        self.decoder.decode()
    }

    /// Block until one raw byte arrives, without any decoding.
    pub fn read_byte(&mut self) -> io::Result<u8> {
        let _guard = RawModeGuard::acquire(&mut self.mode)?;
        self.decoder.read_byte()
    }

    /// Number of bytes that can be read right now without blocking.
    ///
    /// Zero means a following [`Keyboard::read_key`] would block.
    pub fn pending(&mut self) -> io::Result<usize> {
        let _guard = RawModeGuard::acquire(&mut self.mode)?;
        self.decoder.available()
    }

    /// The wrapped decoder.
    pub fn decoder(&self) -> &KeyDecoder<S> {
        &self.decoder
    }

    /// The mode switch.
    pub fn mode(&self) -> &M {
        &self.mode
    }
}
