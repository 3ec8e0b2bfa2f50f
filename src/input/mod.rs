//! Keyboard input: byte sources and the byte-to-key decoder.
//!
//! # Architecture
//!
//! ```text
//! stdin (fd 0) ─→ StdinSource ─┐
//!                              ├─→ KeyDecoder.decode() ─→ KeyEvent
//! recorded bytes ─→ Scripted ──┘        │
//!                                       └─ replay buffer (byte after a lone ESC)
//! ```
//!
//! # Modules
//!
//! - [`source`] - `ByteSource` trait, stdin and in-memory sources
//! - [`decoder`] - `KeyDecoder` state machine

// Rust guideline compliant 2026-02

pub mod decoder;
pub mod source;

#[doc(inline)]
pub use decoder::KeyDecoder;
#[doc(inline)]
pub use source::{ByteSource, ScriptedSource, StdinSource};
