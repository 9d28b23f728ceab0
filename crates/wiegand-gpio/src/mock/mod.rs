//! Mock edge-source implementation for testing and development.
//!
//! Simulates GPIO rising edges programmatically, without physical
//! hardware or elevated permissions.

mod gpio;

pub use gpio::{MockGpio, MockGpioHandle};
