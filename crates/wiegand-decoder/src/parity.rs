//! Parity validation for reader frames.
//!
//! Wiegand reader frames protect their payload with two parity bits: the
//! first transmitted bit makes the first half of the frame even, the last
//! bit makes the second half odd. The halves split at the exact midpoint;
//! both recognized formats (26 and 34 bits) are even-length, so the split
//! is never ambiguous. An extension to odd-length formats would have to
//! define its own tie-break, which is why the check asserts evenness in
//! debug builds instead of rounding quietly.

use wiegand_core::Bit;

/// Check the even/odd parity halves of a reader frame.
///
/// The first half must contain an even number of set bits, the second
/// half an odd number.
///
/// # Examples
///
/// ```
/// use wiegand_core::Bit::{One, Zero};
/// use wiegand_decoder::parity::parity_ok;
///
/// // 4-bit toy frame: first half [1, 1] even, second half [0, 1] odd
/// assert!(parity_ok(&[One, One, Zero, One]));
/// assert!(!parity_ok(&[One, Zero, Zero, One]));
/// ```
#[must_use]
pub fn parity_ok(frame: &[Bit]) -> bool {
    debug_assert!(
        frame.len() % 2 == 0,
        "parity split requires an even frame length, got {}",
        frame.len()
    );
    let (even_half, odd_half) = frame.split_at(frame.len() / 2);
    let even_ones = even_half.iter().filter(|b| b.is_one()).count();
    let odd_ones = odd_half.iter().filter(|b| b.is_one()).count();
    even_ones % 2 == 0 && odd_ones % 2 == 1
}

/// Extract the payload value of a validated frame: every bit except the
/// leading and trailing parity bits, interpreted MSB-first.
///
/// # Panics
///
/// Panics if the frame holds fewer than two bits; callers pass complete
/// 26- or 34-bit frames.
#[must_use]
pub fn payload_value(frame: &[Bit]) -> u64 {
    frame[1..frame.len() - 1]
        .iter()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a pattern like "10110" into bits, MSB first.
    fn bits(pattern: &str) -> Vec<Bit> {
        pattern
            .chars()
            .map(|c| if c == '1' { Bit::One } else { Bit::Zero })
            .collect()
    }

    // 26-bit frame: even parity 1, payload 0x400001, odd parity 0.
    const VALID_W26: &str = "10100000000000000000000010";

    #[test]
    fn test_valid_w26_frame() {
        let frame = bits(VALID_W26);
        assert_eq!(frame.len(), 26);
        assert!(parity_ok(&frame));
        assert_eq!(payload_value(&frame), 0x40_0001);
    }

    #[test]
    fn test_even_parity_failure() {
        // Flip the leading parity bit: first half now has an odd count.
        let mut frame = bits(VALID_W26);
        frame[0] = Bit::Zero;
        assert!(!parity_ok(&frame));
    }

    #[test]
    fn test_odd_parity_failure() {
        // Flip the trailing parity bit: second half count becomes even.
        let mut frame = bits(VALID_W26);
        frame[25] = Bit::One;
        assert!(!parity_ok(&frame));
    }

    #[test]
    fn test_flipping_one_parity_bit_leaves_other_half_consistent() {
        let mut frame = bits(VALID_W26);
        frame[0] = Bit::Zero;

        // Second half untouched: still odd on its own.
        let (_, odd_half) = frame.split_at(13);
        assert_eq!(odd_half.iter().filter(|b| b.is_one()).count() % 2, 1);
    }

    // 34-bit frame: even parity 1, payload 0x8000_0001, odd parity 0.
    const VALID_W34: &str = "1100000000000000000000000000000010";

    #[test]
    fn test_valid_w34_frame() {
        let frame = bits(VALID_W34);
        assert_eq!(frame.len(), 34);
        assert!(parity_ok(&frame));
        assert_eq!(payload_value(&frame), 0x8000_0001);
    }

    #[test]
    fn test_w34_single_parity_flip_rejected() {
        let mut frame = bits(VALID_W34);
        frame[33] = Bit::One;
        assert!(!parity_ok(&frame));
    }

    #[test]
    fn test_payload_strips_exactly_the_parity_bits() {
        let frame = bits("100101");
        // Payload is the middle four bits 0010.
        assert_eq!(payload_value(&frame), 0b0010);
    }

    #[test]
    fn test_all_zero_frame_fails_odd_parity() {
        // Even half trivially even, but odd half has zero set bits.
        let frame = bits("0000000000000000000000000000000000");
        assert!(!parity_ok(&frame));
    }
}
