//! Error types for GPIO edge-source operations.

/// Result type alias for GPIO operations.
pub type Result<T> = std::result::Result<T, GpioError>;

/// Errors that can occur while acquiring or driving edge inputs.
#[derive(Debug, thiserror::Error)]
pub enum GpioError {
    /// The pin exists but cannot be claimed (reserved, busy, or failed).
    #[error("Pin {pin} unavailable")]
    PinUnavailable { pin: u8 },

    /// The pin is already claimed by another subscriber.
    #[error("Pin {pin} already attached")]
    AlreadyAttached { pin: u8 },

    /// The pin is not currently attached.
    #[error("Pin {pin} not attached")]
    NotAttached { pin: u8 },

    /// The edge channel's consumer is gone.
    #[error("Edge source disconnected: {device}")]
    Disconnected { device: String },

    /// Generic I/O error from a hardware backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GpioError {
    /// Create a new pin-unavailable error.
    pub fn pin_unavailable(pin: u8) -> Self {
        Self::PinUnavailable { pin }
    }

    /// Create a new already-attached error.
    pub fn already_attached(pin: u8) -> Self {
        Self::AlreadyAttached { pin }
    }

    /// Create a new not-attached error.
    pub fn not_attached(pin: u8) -> Self {
        Self::NotAttached { pin }
    }

    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_unavailable_display() {
        let error = GpioError::pin_unavailable(17);
        assert!(matches!(error, GpioError::PinUnavailable { pin: 17 }));
        assert_eq!(error.to_string(), "Pin 17 unavailable");
    }

    #[test]
    fn test_attach_state_errors() {
        assert_eq!(
            GpioError::already_attached(18).to_string(),
            "Pin 18 already attached"
        );
        assert_eq!(
            GpioError::not_attached(18).to_string(),
            "Pin 18 not attached"
        );
    }

    #[test]
    fn test_disconnected_display() {
        let error = GpioError::disconnected("Mock GPIO");
        assert_eq!(error.to_string(), "Edge source disconnected: Mock GPIO");
    }
}
