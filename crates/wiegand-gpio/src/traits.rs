//! Edge-source trait definition.
//!
//! An edge source is the external collaborator that owns physical (or
//! simulated) input pins and reports their rising edges. The contract is
//! deliberately small: claim a set of pins, receive their edges in arrival
//! order over one channel, release the pins. Everything the edges *mean*
//! is the decoder's business.
//!
//! The trait uses native `async fn` methods (Edition 2024 RPITIT), so it
//! is not object-safe; use generics or the enum wrapper in
//! [`devices`](crate::devices) for dispatch.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Buffer size of the edge delivery channel.
///
/// A Wiegand burst is at most a few dozen bits; the channel only needs to
/// absorb one frame's worth of edges while the consumer runs.
pub const EDGE_CHANNEL_CAPACITY: usize = 64;

/// A single rising-edge event on a claimed pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// BCM pin number the edge occurred on.
    pub pin: u8,

    /// When the edge was observed.
    pub timestamp: DateTime<Utc>,
}

impl Edge {
    /// Create an edge event stamped with the current time.
    #[must_use]
    pub fn now(pin: u8) -> Self {
        Self {
            pin,
            timestamp: Utc::now(),
        }
    }
}

/// Source of rising-edge interrupts on input pins.
///
/// # Contract
///
/// - `attach` claims **every** pin in the slice or **none** of them: on
///   failure, any pin claimed earlier in the same call is released before
///   the error is returned.
/// - All edges from one `attach` call flow through the single returned
///   receiver, in arrival order across pins. Implementations must not
///   reorder, coalesce, or debounce edges.
/// - After `detach` returns, no further edges for those pins are
///   delivered; the receiver yields `None` once drained.
/// - A pin may be claimed by at most one subscriber at a time; two
///   decoders therefore cannot share a line.
///
/// # Examples
///
/// ```no_run
/// use wiegand_gpio::traits::{Edge, EdgeSource};
/// use wiegand_gpio::error::Result;
///
/// async fn first_edge<S: EdgeSource>(source: &mut S) -> Result<Option<Edge>> {
///     let mut edges = source.attach(&[17, 18]).await?;
///     let edge = edges.recv().await;
///     source.detach(&[17, 18]).await?;
///     Ok(edge)
/// }
/// ```
pub trait EdgeSource: Send + Sync {
    /// Claim `pins` for rising-edge delivery.
    ///
    /// Returns the receiving end of the edge channel. Dropping the
    /// receiver does not release the pins; call [`detach`](Self::detach).
    ///
    /// # Errors
    ///
    /// Returns an error if any pin is unavailable or already attached.
    /// No pin remains claimed after a failed call.
    async fn attach(&mut self, pins: &[u8]) -> Result<mpsc::Receiver<Edge>>;

    /// Release previously claimed pins.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the pins is not currently attached.
    async fn detach(&mut self, pins: &[u8]) -> Result<()>;
}
