//! Enum wrapper for edge-source dispatch.
//!
//! Native `async fn` in traits (Edition 2024 RPITIT) is not object-safe,
//! so `Box<dyn EdgeSource>` is not an option. This enum provides concrete
//! dispatch instead: zero-cost, and with a clear slot for each backend as
//! real hardware support lands behind the `hardware-*` features.

use crate::Result;
use crate::mock::MockGpio;
use crate::traits::{Edge, EdgeSource};
use tokio::sync::mpsc;

/// Enum wrapper for edge-source dispatch.
///
/// # Examples
///
/// ```
/// use wiegand_gpio::devices::AnyEdgeSource;
/// use wiegand_gpio::mock::MockGpio;
/// use wiegand_gpio::traits::EdgeSource;
///
/// #[tokio::main]
/// async fn main() -> wiegand_gpio::Result<()> {
///     let (gpio, handle) = MockGpio::new();
///     let mut source = AnyEdgeSource::Mock(gpio);
///
///     let mut edges = source.attach(&[17, 18]).await?;
///     handle.pulse(17).await?;
///     assert_eq!(edges.recv().await.unwrap().pin, 17);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyEdgeSource {
    /// Mock edge source for development and testing.
    Mock(MockGpio),
    // TODO: add an rppal-backed variant behind the hardware-rppal feature
    // once interrupt callbacks are wired to the edge channel.
}

impl EdgeSource for AnyEdgeSource {
    async fn attach(&mut self, pins: &[u8]) -> Result<mpsc::Receiver<Edge>> {
        match self {
            Self::Mock(source) => source.attach(pins).await,
        }
    }

    async fn detach(&mut self, pins: &[u8]) -> Result<()> {
        match self {
            Self::Mock(source) => source.detach(pins).await,
        }
    }
}
