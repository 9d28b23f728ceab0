//! Protocol constants for Wiegand frame decoding.
//!
//! The Wiegand protocol carries no explicit frame terminator: the two data
//! lines pulse once per bit, and transmissions are separated only by a
//! guaranteed idle gap. Decoding therefore hinges on a small set of timing
//! and length constants, centralized here.
//!
//! # Frame formats
//!
//! | Format | Total bits | Layout |
//! |--------|-----------|--------|
//! | Keypad | 4 | 4 data bits, one keypad digit, no parity |
//! | W26 | 26 | 1 even-parity bit, 24 payload bits, 1 odd-parity bit |
//! | W34 | 34 | 1 even-parity bit, 32 payload bits, 1 odd-parity bit |
//!
//! # Usage
//!
//! ```
//! use std::time::Duration;
//! use wiegand_core::constants::*;
//!
//! let quiet = Duration::from_millis(DEFAULT_QUIET_PERIOD_MS);
//! assert_eq!(quiet.as_millis(), 25);
//!
//! fn is_reader_length(len: usize) -> bool {
//!     len >= W26_FRAME_BITS
//! }
//! assert!(is_reader_length(W34_FRAME_BITS));
//! ```

// ============================================================================
// Timing
// ============================================================================

/// Default quiet period in milliseconds.
///
/// A reader pulses bits tens of microseconds apart with at most a couple
/// of milliseconds between them; once the lines have been idle this long,
/// no more bits are coming and the buffered run is finalized into a frame.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 25;

/// Environment variable overriding the quiet period (milliseconds).
///
/// Unparsable or missing values fall back to [`DEFAULT_QUIET_PERIOD_MS`].
pub const QUIET_PERIOD_ENV: &str = "WIEGAND_TIMEOUT";

// ============================================================================
// Frame lengths
// ============================================================================

/// Minimum number of buffered bits for a run to be considered a frame
/// candidate at all. Shorter runs are electrical noise or truncated
/// transmissions and are discarded without comment.
pub const MIN_FRAME_BITS: usize = 4;

/// Exact bit length of a keypad digit frame.
pub const KEYPAD_FRAME_BITS: usize = 4;

/// Total bit length of a standard 26-bit reader frame.
pub const W26_FRAME_BITS: usize = 26;

/// Total bit length of a 34-bit reader frame.
pub const W34_FRAME_BITS: usize = 34;

/// Largest value a 4-bit keypad frame can encode.
///
/// ```
/// use wiegand_core::constants::MAX_KEYPAD_DIGIT;
/// assert_eq!(MAX_KEYPAD_DIGIT, 0b1111);
/// ```
pub const MAX_KEYPAD_DIGIT: u8 = 15;

// ============================================================================
// Default wiring
// ============================================================================

/// Default BCM pin carrying the DATA0 line.
pub const DEFAULT_DATA0_PIN: u8 = 17;

/// Default BCM pin carrying the DATA1 line.
pub const DEFAULT_DATA1_PIN: u8 = 18;
