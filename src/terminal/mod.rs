//! Terminal side: raw mode, the raw-mode keyboard, and ANSI output.
//!
//! # Modules
//!
//! - [`guard`] - `ModeSwitch`, termios raw mode, `RawModeGuard`
//! - [`keyboard`] - `Keyboard`, decoding reads scoped to raw mode
//! - [`ansi`] - Colors, cursor and screen escape sequences

// Rust guideline compliant 2026-02

pub mod ansi;
pub mod guard;
pub mod keyboard;

#[doc(inline)]
pub use ansi::{Color, Position, Segment};
#[doc(inline)]
pub use guard::{ModeSwitch, RawModeGuard, Termios};
#[doc(inline)]
pub use keyboard::Keyboard;
