//! Decoder configuration.
//!
//! Every field is optional: missing values fall back to documented
//! defaults, while structurally invalid values (identical pins, a zero
//! quiet period) are rejected at `begin` time rather than silently
//! corrected.

use crate::error::{DecoderError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wiegand_core::constants::{
    DEFAULT_DATA0_PIN, DEFAULT_DATA1_PIN, DEFAULT_QUIET_PERIOD_MS, QUIET_PERIOD_ENV,
};

/// Decoder configuration with optional fields.
///
/// # Examples
///
/// ```
/// use wiegand_decoder::DecoderConfig;
///
/// // All defaults: BCM 17/18, 25 ms quiet period
/// let config = DecoderConfig::default();
/// let resolved = config.resolve().unwrap();
/// assert_eq!(resolved.data0_pin, 17);
/// assert_eq!(resolved.data1_pin, 18);
/// assert_eq!(resolved.quiet_period.as_millis(), 25);
///
/// // Partial override
/// let config = DecoderConfig {
///     quiet_period_ms: Some(50),
///     ..DecoderConfig::default()
/// };
/// assert_eq!(config.resolve().unwrap().quiet_period.as_millis(), 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// BCM pin carrying DATA0. Defaults to 17.
    pub data0_pin: Option<u8>,

    /// BCM pin carrying DATA1. Defaults to 18.
    pub data1_pin: Option<u8>,

    /// Quiet period in milliseconds after which a buffered run is
    /// finalized. Defaults to 25.
    pub quiet_period_ms: Option<u64>,
}

impl DecoderConfig {
    /// Build a configuration from the environment.
    ///
    /// Honors the `WIEGAND_TIMEOUT` variable (milliseconds) for the quiet
    /// period; unset or unparsable values leave the field at its default.
    /// Pins are not read from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let quiet_period_ms = std::env::var(QUIET_PERIOD_ENV)
            .ok()
            .and_then(|value| value.parse().ok());
        Self {
            quiet_period_ms,
            ..Self::default()
        }
    }

    /// Resolve the configuration: fill defaults for missing fields,
    /// reject structurally invalid ones.
    ///
    /// # Errors
    ///
    /// Returns `DecoderError::Config` if both lines are mapped to the
    /// same pin or the quiet period is zero.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let data0_pin = self.data0_pin.unwrap_or(DEFAULT_DATA0_PIN);
        let data1_pin = self.data1_pin.unwrap_or(DEFAULT_DATA1_PIN);
        if data0_pin == data1_pin {
            return Err(DecoderError::config(format!(
                "DATA0 and DATA1 must use distinct pins, both set to {data0_pin}"
            )));
        }

        let quiet_ms = self.quiet_period_ms.unwrap_or(DEFAULT_QUIET_PERIOD_MS);
        if quiet_ms == 0 {
            return Err(DecoderError::config("Quiet period must be non-zero"));
        }

        Ok(ResolvedConfig {
            data0_pin,
            data1_pin,
            quiet_period: Duration::from_millis(quiet_ms),
        })
    }
}

/// A fully resolved configuration, produced once at `begin` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// BCM pin carrying DATA0.
    pub data0_pin: u8,

    /// BCM pin carrying DATA1.
    pub data1_pin: u8,

    /// Idle duration that delimits frames.
    pub quiet_period: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let resolved = DecoderConfig::default().resolve().unwrap();
        assert_eq!(resolved.data0_pin, DEFAULT_DATA0_PIN);
        assert_eq!(resolved.data1_pin, DEFAULT_DATA1_PIN);
        assert_eq!(
            resolved.quiet_period,
            Duration::from_millis(DEFAULT_QUIET_PERIOD_MS)
        );
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = DecoderConfig {
            data0_pin: Some(5),
            ..DecoderConfig::default()
        };
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.data0_pin, 5);
        assert_eq!(resolved.data1_pin, DEFAULT_DATA1_PIN);
    }

    #[test]
    fn test_identical_pins_rejected() {
        let config = DecoderConfig {
            data0_pin: Some(9),
            data1_pin: Some(9),
            quiet_period_ms: None,
        };
        let result = config.resolve();
        assert!(matches!(result, Err(DecoderError::Config { .. })));
    }

    #[test]
    fn test_zero_quiet_period_rejected() {
        let config = DecoderConfig {
            quiet_period_ms: Some(0),
            ..DecoderConfig::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(DecoderError::Config { .. })
        ));
    }

    #[test]
    fn test_serde_unknown_and_missing_fields_fall_back() {
        // Missing fields deserialize as None, unknown fields are ignored.
        let config: DecoderConfig =
            serde_json::from_str(r#"{"quiet_period_ms": 40, "unrecognized": true}"#).unwrap();
        assert_eq!(config.quiet_period_ms, Some(40));
        assert_eq!(config.data0_pin, None);

        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_from_env_round_trip() {
        // Single test mutates the variable to avoid races between
        // parallel tests reading it.
        unsafe { std::env::set_var(QUIET_PERIOD_ENV, "120") };
        assert_eq!(DecoderConfig::from_env().quiet_period_ms, Some(120));

        unsafe { std::env::set_var(QUIET_PERIOD_ENV, "not-a-number") };
        assert_eq!(DecoderConfig::from_env().quiet_period_ms, None);

        unsafe { std::env::remove_var(QUIET_PERIOD_ENV) };
        assert_eq!(DecoderConfig::from_env(), DecoderConfig::default());
    }
}
