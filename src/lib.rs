//! ttykeys - raw-mode keyboard decoding for terminal programs.
//!
//! Reads keypresses byte by byte in raw mode and turns them into a closed
//! set of logical keys, compatible with the classic numeric key codes of
//! DOS-style extended scan codes and ANSI cursor sequences. Also carries the
//! small set of ANSI output helpers such programs need (colors, cursor,
//! screen, title).
//!
//! # Architecture
//!
//! ```text
//! Keyboard::read_key()
//! ├── RawModeGuard   (termios raw mode, restored on drop)
//! └── KeyDecoder     (ByteSource → KeyEvent, one event per call)
//! ```
//!
//! # Modules
//!
//! - [`key`] - `Key` / `KeyEvent` and the legacy code table
//! - [`input`] - Byte sources and the decoder
//! - [`terminal`] - Raw mode, keyboard facade, ANSI output
//! - [`config`] - Configuration loading/saving
//! - [`constants`] - Protocol bytes and defaults

pub mod config;
pub mod constants;
pub mod input;
pub mod key;
pub mod terminal;

// Re-export commonly used types
pub use config::Config;
pub use input::{ByteSource, KeyDecoder, ScriptedSource, StdinSource};
pub use key::{Key, KeyEvent};
pub use terminal::{Color, Keyboard, ModeSwitch, Position, RawModeGuard, Segment, Termios};
