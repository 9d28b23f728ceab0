//! Timeout-gated bit buffer.
//!
//! The assembler is deliberately dumb: it appends bits in arrival order
//! and, when told the lines have gone quiet, hands over whatever
//! accumulated — or discards it when the run is too short to be a frame.
//! It never interprets the bits; that is the classifier's job. The timer
//! that decides *when* the lines are quiet lives in the decode task, so
//! the assembler itself stays synchronous and trivially testable.

use wiegand_core::{Bit, constants::MIN_FRAME_BITS};

/// Accumulates bits between quiet periods.
///
/// There is no maximum length: any number of bits arriving within one
/// quiet window belongs to the same run, and the classifier later ignores
/// trailing excess.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    bits: Vec<Bit>,
}

impl FrameAssembler {
    /// Create an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bit in arrival order.
    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    /// Number of bits buffered since the last finalize.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` while no bits are buffered (and hence no quiet
    /// timer needs to be armed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Finalize the current run because the quiet period elapsed.
    ///
    /// Returns the buffered bits when at least [`MIN_FRAME_BITS`] have
    /// accumulated, `None` for shorter runs (noise or a truncated
    /// transmission — not an error). The buffer is cleared
    /// unconditionally either way; this is the sole reset point.
    pub fn finalize(&mut self) -> Option<Vec<Bit>> {
        let bits = std::mem::take(&mut self.bits);
        if bits.len() >= MIN_FRAME_BITS {
            Some(bits)
        } else {
            None
        }
    }
}
