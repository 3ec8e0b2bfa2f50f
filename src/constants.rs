//! Constants shared by the decoder, the stdin source and the CLI.
//!
//! # Categories
//!
//! - **Bytes**: prefix bytes the decoder dispatches on
//! - **Timing**: stdin sampling delay
//! - **Files**: config and log file names

use std::time::Duration;

// ============================================================================
// Bytes
// ============================================================================

/// Carriage return, decoded as Enter.
pub const CARRIAGE_RETURN: u8 = 13;

/// Escape; starts an ANSI escape sequence or stands alone.
pub const ESC: u8 = 0x1b;

/// Single-byte (8-bit) Control Sequence Introducer, treated like ESC.
pub const CSI_8BIT: u8 = 155;

/// First legacy extended-key marker; selects the numpad table.
pub const NUMPAD_PREFIX: u8 = 0;

/// Second legacy extended-key marker; selects the navigation table.
pub const EXTENDED_PREFIX: u8 = 224;

/// Scan code of F1 after [`NUMPAD_PREFIX`].
pub const NUMPAD_F1_SCAN: i32 = 59;

/// Scan code of F1 after [`EXTENDED_PREFIX`].
pub const EXTENDED_F1_SCAN: i32 = 123;

/// Bytes that must already be queued, ESC included, before an ESC is read
/// as the start of a CSI sequence rather than a lone keypress.
pub const ESCAPE_SEQUENCE_MIN_AVAILABLE: usize = 3;

// ============================================================================
// Timing
// ============================================================================

/// Delay before counting queued stdin bytes.
///
/// Terminals write a whole escape sequence at once, but the bytes can still
/// be in flight when the first one is noticed. 100µs is enough for a local
/// pty and imperceptible to a human.
pub const DEFAULT_SAMPLE_DELAY: Duration = Duration::from_micros(100);

// ============================================================================
// Files
// ============================================================================

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name used when no log file is configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "ttykeys.log";
