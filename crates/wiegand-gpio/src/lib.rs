//! GPIO edge-source abstraction for the Wiegand decoder.
//!
//! This crate is the decoder's only contact with hardware. It defines the
//! [`EdgeSource`] trait — a collaborator that claims input pins, watches
//! them for rising edges, and delivers every edge through a single
//! arrival-ordered channel — plus a channel-driven mock implementation for
//! development and testing without physical wiring.
//!
//! # Design Philosophy
//!
//! - **Async-first**: the trait uses native `async fn` methods (Edition
//!   2024 RPITIT); edges arrive over a `tokio::sync::mpsc` channel.
//! - **Arrival order is sacred**: all claimed pins feed one channel, so
//!   the relative order of DATA0/DATA1 pulses survives buffering. The
//!   decoder's parity and payload extraction depend on it.
//! - **No debouncing**: this layer reports every rising edge it sees;
//!   separating frames from noise is the decoder's job via its
//!   quiet-period timer.
//! - **All-or-nothing acquisition**: [`EdgeSource::attach`] claims every
//!   requested pin or none, so a failed start never leaves a pin dangling.
//!
//! # Example
//!
//! ```
//! use wiegand_gpio::mock::MockGpio;
//! use wiegand_gpio::traits::EdgeSource;
//!
//! #[tokio::main]
//! async fn main() -> wiegand_gpio::Result<()> {
//!     let (mut gpio, handle) = MockGpio::new();
//!     let mut edges = gpio.attach(&[17, 18]).await?;
//!
//!     handle.pulse(18).await?;
//!
//!     let edge = edges.recv().await.expect("edge delivered");
//!     assert_eq!(edge.pin, 18);
//!     Ok(())
//! }
//! ```
//!
//! # Real hardware
//!
//! Only the mock backend exists today. Real backends (rppal, gpiod) are
//! reserved behind the `hardware-*` cargo features and would slot in as
//! additional [`AnyEdgeSource`](devices::AnyEdgeSource) variants.

pub mod devices;
pub mod error;
pub mod mock;
pub mod traits;

pub use error::{GpioError, Result};
pub use traits::{EDGE_CHANNEL_CAPACITY, Edge, EdgeSource};

pub use devices::AnyEdgeSource;
