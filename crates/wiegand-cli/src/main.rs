//! Demo binary: runs the Wiegand decoder against the mock edge source
//! and replays a keypad press followed by a 26-bit card swipe.
//!
//! Pin numbers and the quiet period come from the environment (see
//! `DecoderConfig::from_env`); log verbosity from `RUST_LOG`.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wiegand_core::constants::{DEFAULT_DATA0_PIN, DEFAULT_DATA1_PIN};
use wiegand_decoder::{Decoder, DecoderConfig, DecoderEvent};
use wiegand_gpio::AnyEdgeSource;
use wiegand_gpio::mock::{MockGpio, MockGpioHandle};

/// A valid 26-bit frame carrying payload 0x40_0001: leading even
/// parity over the first 13 bits, trailing odd parity over the last 13.
const DEMO_W26: &str = "10100000000000000000000010";

async fn replay_keypad_digit(pins: &MockGpioHandle, digit: u8) -> Result<()> {
    for shift in (0..4).rev() {
        let pin = if digit >> shift & 1 == 1 {
            DEFAULT_DATA1_PIN
        } else {
            DEFAULT_DATA0_PIN
        };
        pins.pulse(pin).await?;
    }
    Ok(())
}

async fn replay_card_swipe(pins: &MockGpioHandle, frame: &str) -> Result<()> {
    for bit in frame.chars() {
        let pin = if bit == '1' {
            DEFAULT_DATA1_PIN
        } else {
            DEFAULT_DATA0_PIN
        };
        pins.pulse(pin).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DecoderConfig::from_env();
    let (gpio, pins) = MockGpio::new();
    let mut decoder = Decoder::new(AnyEdgeSource::Mock(gpio), config);

    let mut events = decoder.begin().await.context("failed to start decoder")?;
    info!("decoder listening on mock edge source");

    replay_keypad_digit(&pins, 5).await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    replay_card_swipe(&pins, DEMO_W26).await?;

    for _ in 0..2 {
        match events.recv().await {
            Some(DecoderEvent::Keypad(press)) => {
                info!(digit = press.digit, at = %press.timestamp, "keypad press");
            }
            Some(DecoderEvent::Reader(read)) => {
                info!(
                    value = read.value,
                    format = %read.format,
                    at = %read.timestamp,
                    "card read"
                );
            }
            Some(_) => {}
            None => break,
        }
    }

    decoder.stop().await.context("failed to stop decoder")?;
    info!("decoder stopped");
    Ok(())
}
