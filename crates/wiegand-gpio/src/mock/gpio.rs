//! Mock GPIO edge source.
//!
//! This module provides a simulated edge source that can be driven
//! programmatically. Tests and the demo CLI pulse pins through a
//! `MockGpioHandle`; anything attached to those pins sees the edges in
//! exactly the order the pulses were issued.

use crate::{
    Result,
    error::GpioError,
    traits::{EDGE_CHANNEL_CAPACITY, Edge, EdgeSource},
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

#[derive(Debug, Default)]
struct MockState {
    /// Claimed pins and the edge channel each feeds.
    claimed: HashMap<u8, mpsc::Sender<Edge>>,

    /// Pins configured to fail acquisition.
    unavailable: HashSet<u8>,
}

/// Mock edge source for testing and development.
///
/// Created together with a [`MockGpioHandle`] that simulates the physical
/// side: pulsing pins and breaking them. Both halves share the same pin
/// state, so a pulse on a detached pin fails the way a real interrupt
/// subsystem would simply stay silent.
///
/// # Examples
///
/// ```
/// use wiegand_gpio::mock::MockGpio;
/// use wiegand_gpio::traits::EdgeSource;
///
/// #[tokio::main]
/// async fn main() -> wiegand_gpio::Result<()> {
///     let (mut gpio, handle) = MockGpio::new();
///
///     let mut edges = gpio.attach(&[17, 18]).await?;
///
///     // Simulate a 1 bit then a 0 bit
///     handle.pulse(18).await?;
///     handle.pulse(17).await?;
///
///     assert_eq!(edges.recv().await.unwrap().pin, 18);
///     assert_eq!(edges.recv().await.unwrap().pin, 17);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockGpio {
    state: Arc<Mutex<MockState>>,
    name: String,
}

impl MockGpio {
    /// Create a new mock edge source with the default name.
    pub fn new() -> (Self, MockGpioHandle) {
        Self::with_name("Mock GPIO".to_string())
    }

    /// Create a new mock edge source with a custom name.
    pub fn with_name(name: String) -> (Self, MockGpioHandle) {
        let state = Arc::new(Mutex::new(MockState::default()));

        let gpio = Self {
            state: Arc::clone(&state),
            name: name.clone(),
        };

        let handle = MockGpioHandle { state, name };

        (gpio, handle)
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EdgeSource for MockGpio {
    async fn attach(&mut self, pins: &[u8]) -> Result<mpsc::Receiver<Edge>> {
        let mut state = self.state.lock().await;

        // Validate the whole set before claiming anything, so a failure
        // leaves no pin attached.
        for &pin in pins {
            if state.unavailable.contains(&pin) {
                return Err(GpioError::pin_unavailable(pin));
            }
            if state.claimed.contains_key(&pin) {
                return Err(GpioError::already_attached(pin));
            }
        }

        let (tx, rx) = mpsc::channel(EDGE_CHANNEL_CAPACITY);
        for &pin in pins {
            state.claimed.insert(pin, tx.clone());
        }

        Ok(rx)
    }

    async fn detach(&mut self, pins: &[u8]) -> Result<()> {
        let mut state = self.state.lock().await;

        for &pin in pins {
            if !state.claimed.contains_key(&pin) {
                return Err(GpioError::not_attached(pin));
            }
        }
        for &pin in pins {
            state.claimed.remove(&pin);
        }

        Ok(())
    }
}

/// Handle for driving a [`MockGpio`].
///
/// Can be cloned and shared across tasks. Pulses issued through any clone
/// are delivered in issue order.
#[derive(Debug, Clone)]
pub struct MockGpioHandle {
    state: Arc<Mutex<MockState>>,
    name: String,
}

impl MockGpioHandle {
    /// Simulate a rising edge on `pin`.
    ///
    /// # Errors
    ///
    /// Returns `GpioError::NotAttached` if nothing is attached to the pin,
    /// and `GpioError::Disconnected` if the attached receiver was dropped.
    pub async fn pulse(&self, pin: u8) -> Result<()> {
        let tx = {
            let state = self.state.lock().await;
            state
                .claimed
                .get(&pin)
                .cloned()
                .ok_or(GpioError::not_attached(pin))?
        };

        tx.send(Edge::now(pin))
            .await
            .map_err(|_| GpioError::disconnected(self.name.clone()))
    }

    /// Simulate a run of rising edges, one per pin in the slice, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first pin that is not attached or whose receiver is
    /// gone; earlier pulses in the slice have already been delivered.
    pub async fn pulse_many(&self, pins: &[u8]) -> Result<()> {
        for &pin in pins {
            self.pulse(pin).await?;
        }
        Ok(())
    }

    /// Mark `pin` as unavailable: subsequent `attach` calls that include
    /// it fail with `GpioError::PinUnavailable`.
    pub async fn set_unavailable(&self, pin: u8) {
        self.state.lock().await.unavailable.insert(pin);
    }

    /// Check whether anything is currently attached to `pin`.
    pub async fn is_attached(&self, pin: u8) -> bool {
        self.state.lock().await.claimed.contains_key(&pin)
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_attach_and_pulse() {
        let (mut gpio, handle) = MockGpio::new();

        let mut edges = gpio.attach(&[17, 18]).await.unwrap();

        handle.pulse(18).await.unwrap();
        handle.pulse(17).await.unwrap();
        handle.pulse(17).await.unwrap();

        assert_eq!(edges.recv().await.unwrap().pin, 18);
        assert_eq!(edges.recv().await.unwrap().pin, 17);
        assert_eq!(edges.recv().await.unwrap().pin, 17);
    }

    #[tokio::test]
    async fn test_pulse_order_preserved_across_pins() {
        let (mut gpio, handle) = MockGpio::new();
        let mut edges = gpio.attach(&[1, 2]).await.unwrap();

        let sequence = [2u8, 1, 1, 2, 1];
        handle.pulse_many(&sequence).await.unwrap();

        for &expected in &sequence {
            assert_eq!(edges.recv().await.unwrap().pin, expected);
        }
    }

    #[tokio::test]
    async fn test_attach_unavailable_pin_claims_nothing() {
        let (mut gpio, handle) = MockGpio::new();
        handle.set_unavailable(18).await;

        let result = gpio.attach(&[17, 18]).await;
        assert!(matches!(result, Err(GpioError::PinUnavailable { pin: 18 })));

        // The other pin in the failed set must not be left claimed.
        assert!(!handle.is_attached(17).await);
        assert!(gpio.attach(&[17]).await.is_ok());
    }

    #[tokio::test]
    async fn test_double_attach_rejected() {
        let (mut gpio, _handle) = MockGpio::new();

        let _edges = gpio.attach(&[17]).await.unwrap();
        let result = gpio.attach(&[17, 19]).await;
        assert!(matches!(result, Err(GpioError::AlreadyAttached { pin: 17 })));
    }

    #[tokio::test]
    async fn test_detach_stops_delivery() {
        let (mut gpio, handle) = MockGpio::new();

        let mut edges = gpio.attach(&[17]).await.unwrap();
        handle.pulse(17).await.unwrap();
        gpio.detach(&[17]).await.unwrap();

        // Pulse after detach is rejected, not queued.
        let result = handle.pulse(17).await;
        assert!(matches!(result, Err(GpioError::NotAttached { pin: 17 })));

        // The edge delivered before detach is still drainable, then the
        // channel ends.
        assert_eq!(edges.recv().await.unwrap().pin, 17);
        assert!(edges.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_detach_unattached_pin() {
        let (mut gpio, _handle) = MockGpio::new();
        let result = gpio.detach(&[17]).await;
        assert!(matches!(result, Err(GpioError::NotAttached { pin: 17 })));
    }

    #[tokio::test]
    async fn test_dropped_receiver_reports_disconnected() {
        let (mut gpio, handle) = MockGpio::new();

        let edges = gpio.attach(&[17]).await.unwrap();
        drop(edges);

        let result = handle.pulse(17).await;
        assert!(matches!(result, Err(GpioError::Disconnected { .. })));
    }

    #[tokio::test]
    async fn test_disjoint_attachments() {
        let (mut gpio, handle) = MockGpio::new();

        let mut a = gpio.attach(&[1, 2]).await.unwrap();
        let mut b = gpio.attach(&[3, 4]).await.unwrap();

        handle.pulse(1).await.unwrap();
        handle.pulse(3).await.unwrap();

        assert_eq!(a.recv().await.unwrap().pin, 1);
        assert_eq!(b.recv().await.unwrap().pin, 3);
    }
}
