//! Wiegand frame-assembly and decoding state machine.
//!
//! This crate turns the raw rising-edge events delivered by a
//! [`wiegand_gpio::EdgeSource`] into decoded values: keypad digits and
//! parity-validated reader codes. It is the only part of the workspace
//! with real protocol logic.
//!
//! # How decoding works
//!
//! The Wiegand wire format has no frame terminator. A transmission is a
//! burst of pulses — DATA0 for a 0 bit, DATA1 for a 1 bit — followed by a
//! guaranteed idle gap. The decoder therefore buffers bits as they arrive
//! and arms a *quiet-period timer* that is cancelled and restarted on
//! every bit; only when the lines stay silent for the full quiet period
//! (25 ms by default) is the buffered run finalized into a frame:
//!
//! 1. [`FrameAssembler`] accumulates bits and hands the run over when the
//!    timer fires, discarding runs shorter than 4 bits as noise.
//! 2. [`classify`] dispatches on length, longest match first: 34 or more
//!    bits → 34-bit reader candidate, 26 or more → 26-bit candidate
//!    (trailing over-accumulated bits are ignored), exactly 4 → keypad
//!    digit. Anything else is dropped.
//! 3. Reader candidates must pass the even/odd parity check
//!    ([`parity`]) before a value is emitted; failures are dropped
//!    silently because parity errors on access-control wiring are routine
//!    line noise, not faults.
//!
//! # Lifecycle
//!
//! [`Decoder::begin`] claims both data pins from the edge source, spawns
//! the serialized decode task, and returns a [`DecoderHandle`] for
//! receiving [`DecoderEvent`]s — the successful return *is* the ready
//! signal. [`Decoder::stop`] cancels the task (including any pending
//! quiet-period timer) and releases the pins; the decoder is then idle
//! and may begin again with a clean buffer.
//!
//! # Example
//!
//! ```
//! use wiegand_decoder::{Decoder, DecoderConfig, DecoderEvent};
//! use wiegand_gpio::mock::MockGpio;
//!
//! #[tokio::main]
//! async fn main() -> wiegand_decoder::Result<()> {
//!     let (gpio, pins) = MockGpio::new();
//!     let mut decoder = Decoder::new(gpio, DecoderConfig::default());
//!     let mut events = decoder.begin().await?;
//!
//!     // Simulate a keypad "5": bits 0101 (D0=17, D1=18 by default)
//!     pins.pulse_many(&[17, 18, 17, 18]).await.ok();
//!
//!     if let Some(DecoderEvent::Keypad(press)) = events.recv().await {
//!         assert_eq!(press.digit, 5);
//!     }
//!
//!     decoder.stop().await?;
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod classify;
pub mod config;
pub mod decoder;
pub mod error;
pub mod parity;

pub use assembler::FrameAssembler;
pub use classify::{Decoded, classify};
pub use config::{DecoderConfig, ResolvedConfig};
pub use decoder::{Decoder, DecoderEvent, DecoderHandle, EVENT_CHANNEL_CAPACITY};
pub use error::{DecoderError, Result};
