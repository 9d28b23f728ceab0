//! Error types for decoder lifecycle operations.
//!
//! Note the deliberate asymmetry with malformed input: bad configuration
//! and failed pin acquisition are errors and surface synchronously from
//! `begin`, but malformed *frames* never appear here — wrong lengths and
//! failed parity are routine line noise and are dropped silently inside
//! the decode task.

use thiserror::Error;
use wiegand_gpio::GpioError;

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur while configuring or running a decoder.
#[derive(Debug, Error)]
pub enum DecoderError {
    /// Structurally invalid configuration (missing values get defaults
    /// instead and never reach this variant).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// `begin` was called while the decoder is already listening.
    #[error("Decoder is already listening")]
    AlreadyListening,

    /// `stop` was called while the decoder is idle.
    #[error("Decoder is not listening")]
    NotListening,

    /// The edge source failed to attach or release a pin.
    #[error(transparent)]
    Gpio(#[from] GpioError),
}

impl DecoderError {
    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
