//! Decoder facade: lifecycle and the serialized decode task.
//!
//! One `Decoder` owns one edge-source attachment, one bit buffer, and at
//! most one pending quiet-period timer. Edge events and timer expiry are
//! serialized onto a single `tokio::select!` loop, so the state machine
//! needs no locking and bits are processed strictly in arrival order —
//! the ordering across the two lines is what makes parity and payload
//! extraction correct.
//!
//! ```text
//! EdgeSource ──edges (mpsc)──► decode task ──events (mpsc)──► DecoderHandle
//!                                  │
//!                            quiet-period timer
//!                         (rearmed on every bit)
//! ```

use crate::assembler::FrameAssembler;
use crate::classify::{Decoded, classify};
use crate::config::{DecoderConfig, ResolvedConfig};
use crate::error::{DecoderError, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};
use wiegand_core::{CardRead, KeypadPress, Line};
use wiegand_gpio::{Edge, EdgeSource};

/// Buffer size of the decoded-event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 32;

/// A decoded result emitted to the consumer, 1:1 with each accepted
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecoderEvent {
    /// A 4-bit keypad digit frame.
    Keypad(KeypadPress),

    /// A parity-validated 26- or 34-bit reader frame.
    Reader(CardRead),
}

/// Handle for receiving decoded events while the decoder is listening.
///
/// Returned by [`Decoder::begin`]; its existence is the ready signal.
pub struct DecoderHandle {
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl DecoderHandle {
    /// Receive the next decoded event.
    ///
    /// Returns `None` once the decode task has terminated (after
    /// [`Decoder::stop`] or loss of the edge source) and the channel is
    /// drained.
    pub async fn recv(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Wiegand decoder with an explicit `Idle` / `Listening` lifecycle.
///
/// # Examples
///
/// ```no_run
/// use wiegand_decoder::{Decoder, DecoderConfig, DecoderEvent};
/// use wiegand_gpio::mock::MockGpio;
///
/// # async fn example() -> wiegand_decoder::Result<()> {
/// let (gpio, _pins) = MockGpio::new();
/// let mut decoder = Decoder::new(gpio, DecoderConfig::default());
///
/// let mut events = decoder.begin().await?;
/// while let Some(event) = events.recv().await {
///     match event {
///         DecoderEvent::Keypad(press) => println!("digit {}", press.digit),
///         DecoderEvent::Reader(read) => println!("card {}", read.value),
///         _ => {}
///     }
/// }
/// decoder.stop().await?;
/// # Ok(())
/// # }
/// ```
pub struct Decoder<E: EdgeSource> {
    source: E,
    config: DecoderConfig,
    listening: Option<Listening>,
}

/// State held only while listening.
struct Listening {
    task: JoinHandle<()>,
    pins: [u8; 2],
}

impl<E: EdgeSource> Decoder<E> {
    /// Create an idle decoder over the given edge source.
    pub fn new(source: E, config: DecoderConfig) -> Self {
        Self {
            source,
            config,
            listening: None,
        }
    }

    /// Returns `true` while the decode task is running.
    pub fn is_listening(&self) -> bool {
        self.listening.is_some()
    }

    /// Start listening: resolve the configuration, claim both data pins,
    /// and spawn the decode task.
    ///
    /// The returned handle yields decoded events; its successful return
    /// is the readiness signal — edge handlers are registered before
    /// `begin` completes.
    ///
    /// # Errors
    ///
    /// - `DecoderError::AlreadyListening` if called while listening (the
    ///   decoder never silently re-attaches).
    /// - `DecoderError::Config` for structurally invalid configuration.
    /// - `DecoderError::Gpio` if a pin cannot be claimed; the edge source
    ///   guarantees no partial attachment remains and the decoder stays
    ///   idle.
    pub async fn begin(&mut self) -> Result<DecoderHandle> {
        if self.listening.is_some() {
            return Err(DecoderError::AlreadyListening);
        }

        let resolved = self.config.resolve()?;
        let pins = [resolved.data0_pin, resolved.data1_pin];
        let edges = self.source.attach(&pins).await?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let task = tokio::spawn(decode_task(edges, resolved, event_tx));

        debug!(
            data0 = resolved.data0_pin,
            data1 = resolved.data1_pin,
            quiet_ms = resolved.quiet_period.as_millis() as u64,
            "decoder listening"
        );

        self.listening = Some(Listening { task, pins });
        Ok(DecoderHandle { event_rx })
    }

    /// Stop listening: cancel the decode task and release both pins.
    ///
    /// The task is aborted and awaited before the pins are released, so a
    /// pending quiet-period timer is actively cancelled — no stale decode
    /// can fire after `stop` returns. Buffered bits do not survive a
    /// stop/begin cycle.
    ///
    /// # Errors
    ///
    /// - `DecoderError::NotListening` if the decoder is idle.
    /// - `DecoderError::Gpio` if releasing a pin fails; the decoder is
    ///   idle regardless.
    pub async fn stop(&mut self) -> Result<()> {
        let listening = self.listening.take().ok_or(DecoderError::NotListening)?;

        listening.task.abort();
        // JoinError here is the expected cancellation.
        let _ = listening.task.await;

        self.source.detach(&listening.pins).await?;
        debug!("decoder stopped");
        Ok(())
    }
}

/// The serialized decode loop: one task per listening decoder.
async fn decode_task(
    mut edges: mpsc::Receiver<Edge>,
    config: ResolvedConfig,
    events: mpsc::Sender<DecoderEvent>,
) {
    let mut assembler = FrameAssembler::new();

    loop {
        let edge = if assembler.is_empty() {
            // Nothing buffered: no timer to arm, wait for the first bit.
            match edges.recv().await {
                Some(edge) => Some(edge),
                None => break,
            }
        } else {
            // Buffer active: next bit or quiet-period expiry, whichever
            // comes first. Re-entering this arm after each bit recreates
            // the sleep, giving the cancel-and-restart timer the protocol
            // requires — a fast burst can never time out mid-frame.
            tokio::select! {
                edge = edges.recv() => match edge {
                    Some(edge) => Some(edge),
                    None => break,
                },
                _ = tokio::time::sleep(config.quiet_period) => None,
            }
        };

        match edge {
            Some(edge) => {
                let line = if edge.pin == config.data0_pin {
                    Line::Data0
                } else {
                    Line::Data1
                };
                trace!(pin = edge.pin, %line, "edge");
                assembler.push(line.bit());
            }
            None => {
                if !flush(&mut assembler, &events).await {
                    break;
                }
            }
        }
    }
}

/// Finalize the quiet buffer and emit whatever it decodes to.
///
/// Returns `false` when the consumer is gone and the task should exit.
async fn flush(assembler: &mut FrameAssembler, events: &mpsc::Sender<DecoderEvent>) -> bool {
    let buffered = assembler.len();
    let Some(frame) = assembler.finalize() else {
        debug!(bits = buffered, "partial run discarded");
        return true;
    };

    let event = match classify(&frame) {
        Some(Decoded::Keypad(press)) => {
            debug!(digit = press.digit, "keypad frame decoded");
            DecoderEvent::Keypad(press)
        }
        Some(Decoded::Reader(read)) => {
            debug!(value = read.value, format = %read.format, "reader frame decoded");
            DecoderEvent::Reader(read)
        }
        None => {
            // Unrecognized length or failed parity: routine line noise.
            debug!(bits = frame.len(), "frame dropped");
            return true;
        }
    };

    events.send(event).await.is_ok()
}
