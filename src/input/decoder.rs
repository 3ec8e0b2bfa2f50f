//! Byte-to-key decoder.
//!
//! Turns the raw byte stream from a [`ByteSource`] into one [`KeyEvent`] per
//! call to [`KeyDecoder::decode`].
//!
//! # Dispatch
//!
//! ```text
//! b0 = 13          → Enter
//! b0 = 0,   b1     → numpad table, else F-key arithmetic (b1 - 59)
//! b0 = 224, b1     → navigation table, else F-key arithmetic (b1 - 123)
//! b0 = 27 | 155    → ESC [ A/B/C/D when ≥ 3 bytes were queued, else Escape
//! anything else    → Char(b0)
//! ```
//!
//! # ESC Ambiguity
//!
//! A lone ESC keypress and the first byte of `ESC [ A` are identical. The
//! terminal writes a whole sequence in one go, while a human pressing ESC
//! produces one byte, so the queue length sampled *before* the first read
//! decides: fewer than [`ESCAPE_SEQUENCE_MIN_AVAILABLE`] bytes means a bare
//! Escape and nothing more is read.
//!
//! When the byte after ESC turns out not to be `[`, it is not part of any
//! sequence we understand. It is kept in a replay buffer and becomes the
//! first byte of the next decode instead of being dropped.

// Rust guideline compliant 2026-02

use std::collections::VecDeque;
use std::io;

use super::source::ByteSource;
use crate::constants::{
    CARRIAGE_RETURN, CSI_8BIT, ESC, ESCAPE_SEQUENCE_MIN_AVAILABLE, EXTENDED_F1_SCAN,
    EXTENDED_PREFIX, NUMPAD_F1_SCAN, NUMPAD_PREFIX,
};
use crate::key::{Key, KeyEvent, F1_CODE};

/// Stateful decoder over a byte source.
///
/// The only state carried between calls is the replay buffer. A decoder
/// owns its source, so one stream cannot be decoded from two places at once.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
    /// Bytes read ahead and given back, consumed before the source.
    replay: VecDeque<u8>,
}

impl<S: ByteSource> KeyDecoder<S> {
    /// Wrap a byte source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            replay: VecDeque::new(),
        }
    }

    /// Decode exactly one key event.
    ///
    /// Reads one, two or three bytes. Never fails on content: every byte
    /// sequence maps to some event. Errors come only from reading the source
    /// and are returned unchanged. If the source cannot count queued bytes,
    /// only replayed bytes are counted.
    pub fn decode(&mut self) -> io::Result<KeyEvent> {
        let available = self.available().unwrap_or_else(|e| {
            log::debug!("availability unknown ({e}), assuming none queued");
            self.replay.len()
        });
        let b0 = self.next_byte()?;

        let event = match b0 {
            CARRIAGE_RETURN => KeyEvent::Key(Key::Enter),
            NUMPAD_PREFIX => numpad_key(self.next_byte()?),
            EXTENDED_PREFIX => extended_key(self.next_byte()?),
            ESC | CSI_8BIT => self.decode_escape(available)?,
            other => KeyEvent::Char(other),
        };

        log::trace!("decoded 0x{b0:02x} (available={available}) as {event}");
        Ok(event)
    }

    /// Single raw byte, replay buffer first.
    pub fn read_byte(&mut self) -> io::Result<u8> {
        self.next_byte()
    }

    /// Bytes readable without blocking, replayed bytes included.
    pub fn available(&mut self) -> io::Result<usize> {
        Ok(self.replay.len() + self.source.available()?)
    }

    /// Bytes waiting in the replay buffer.
    pub fn replay_len(&self) -> usize {
        self.replay.len()
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source. Replayed bytes are lost.
    pub fn into_source(self) -> S {
        self.source
    }

    fn next_byte(&mut self) -> io::Result<u8> {
        match self.replay.pop_front() {
            Some(byte) => Ok(byte),
            None => self.source.read_byte(),
        }
    }

    /// ESC or 8-bit CSI has been consumed; `available` was sampled before it.
    fn decode_escape(&mut self, available: usize) -> io::Result<KeyEvent> {
        if available < ESCAPE_SEQUENCE_MIN_AVAILABLE {
            return Ok(KeyEvent::Key(Key::Escape));
        }

        let b1 = self.next_byte()?;
        if b1 != b'[' {
            log::debug!("ESC followed by 0x{b1:02x}, not a CSI; replaying it");
            self.replay.push_front(b1);
            return Ok(KeyEvent::Key(Key::Escape));
        }

        let event = match self.next_byte()? {
            b'A' => KeyEvent::Key(Key::Up),
            b'B' => KeyEvent::Key(Key::Down),
            b'C' => KeyEvent::Key(Key::Right),
            b'D' => KeyEvent::Key(Key::Left),
            other => {
                log::debug!("unrecognized CSI final byte 0x{other:02x}");
                KeyEvent::Key(Key::Escape)
            }
        };
        Ok(event)
    }
}

/// Second byte after the `0` marker.
fn numpad_key(scan: u8) -> KeyEvent {
    let key = match scan {
        71 => Key::Numpad7,
        72 => Key::Numpad8,
        73 => Key::Numpad9,
        75 => Key::Numpad4,
        77 => Key::Numpad6,
        79 => Key::Numpad1,
        80 => Key::Numpad2,
        81 => Key::Numpad3,
        82 => Key::Numpad0,
        83 => Key::NumpadDel,
        other => return function_key(other, NUMPAD_F1_SCAN),
    };
    KeyEvent::Key(key)
}

/// Second byte after the `224` marker.
fn extended_key(scan: u8) -> KeyEvent {
    let key = match scan {
        71 => Key::Home,
        72 => Key::Up,
        73 => Key::PageUp,
        75 => Key::Left,
        77 => Key::Right,
        79 => Key::End,
        80 => Key::Down,
        81 => Key::PageDown,
        82 => Key::Insert,
        83 => Key::Delete,
        other => return function_key(other, EXTENDED_F1_SCAN),
    };
    KeyEvent::Key(key)
}

/// Function keys are a contiguous run of scan codes starting at `f1_scan`.
fn function_key(scan: u8, f1_scan: i32) -> KeyEvent {
    KeyEvent::from_function_code(i32::from(scan) - f1_scan + F1_CODE)
}
