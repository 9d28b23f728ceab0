//! Length-based frame classification.
//!
//! Dispatch is stateless and evaluated longest match first, with `>=`
//! rather than `==` tests on the reader lengths: a handful of trailing
//! noise bits picked up before the quiet period must not disqualify an
//! otherwise complete frame, so only the leading 34 (or 26) bits of an
//! oversized run are treated as significant.

use crate::parity::{parity_ok, payload_value};
use wiegand_core::{
    Bit, CardRead, KeypadPress, WiegandFormat,
    constants::{KEYPAD_FRAME_BITS, W26_FRAME_BITS, W34_FRAME_BITS},
};

/// A successfully classified (and, for reader frames, parity-validated)
/// decode result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// 4-bit keypad digit.
    Keypad(KeypadPress),

    /// 26- or 34-bit reader code.
    Reader(CardRead),
}

/// Classify a finalized run of bits.
///
/// Returns `None` for runs that match no category or fail parity — both
/// are expected line noise and are dropped without an error.
///
/// # Examples
///
/// ```
/// use wiegand_core::Bit::{One, Zero};
/// use wiegand_decoder::classify::{Decoded, classify};
///
/// match classify(&[One, Zero, One, One]) {
///     Some(Decoded::Keypad(press)) => assert_eq!(press.digit, 11),
///     other => panic!("expected a keypad digit, got {other:?}"),
/// }
///
/// // Five bits match nothing
/// assert!(classify(&[One, Zero, One, One, Zero]).is_none());
/// ```
#[must_use]
pub fn classify(bits: &[Bit]) -> Option<Decoded> {
    if bits.len() >= W34_FRAME_BITS {
        reader_frame(&bits[..W34_FRAME_BITS], WiegandFormat::W34)
    } else if bits.len() >= W26_FRAME_BITS {
        reader_frame(&bits[..W26_FRAME_BITS], WiegandFormat::W26)
    } else if bits.len() == KEYPAD_FRAME_BITS {
        let digit = bits.iter().fold(0u8, |acc, bit| (acc << 1) | bit.value());
        // Four bits always fit the 0-15 digit range.
        KeypadPress::new(digit).ok().map(Decoded::Keypad)
    } else {
        None
    }
}

fn reader_frame(frame: &[Bit], format: WiegandFormat) -> Option<Decoded> {
    if !parity_ok(frame) {
        return None;
    }
    // The payload is strictly narrower than u64 for both formats.
    CardRead::new(payload_value(frame), format)
        .ok()
        .map(Decoded::Reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> Vec<Bit> {
        pattern
            .chars()
            .map(|c| if c == '1' { Bit::One } else { Bit::Zero })
            .collect()
    }

    const VALID_W26: &str = "10100000000000000000000010";
    const VALID_W34: &str = "1100000000000000000000000000000010";

    #[test]
    fn test_keypad_digit() {
        let decoded = classify(&bits("1011")).unwrap();
        match decoded {
            Decoded::Keypad(press) => assert_eq!(press.digit, 11),
            other => panic!("expected keypad, got {other:?}"),
        }
    }

    #[test]
    fn test_keypad_has_no_parity_check() {
        // All-ones would fail any parity scheme; keypad frames skip it.
        let decoded = classify(&bits("1111")).unwrap();
        assert!(matches!(decoded, Decoded::Keypad(press) if press.digit == 15));
    }

    #[test]
    fn test_w26_reader() {
        let decoded = classify(&bits(VALID_W26)).unwrap();
        match decoded {
            Decoded::Reader(read) => {
                assert_eq!(read.value, 0x40_0001);
                assert_eq!(read.format, WiegandFormat::W26);
            }
            other => panic!("expected reader, got {other:?}"),
        }
    }

    #[test]
    fn test_w34_reader() {
        let decoded = classify(&bits(VALID_W34)).unwrap();
        assert!(matches!(
            decoded,
            Decoded::Reader(read) if read.value == 0x8000_0001 && read.format == WiegandFormat::W34
        ));
    }

    #[test]
    fn test_parity_failure_drops_frame() {
        let mut frame = bits(VALID_W26);
        frame[0] = Bit::Zero;
        assert!(classify(&frame).is_none());
    }

    #[test]
    fn test_oversized_run_uses_leading_34_bits_only() {
        let mut run = bits(VALID_W34);
        run.extend(bits("111111"));
        assert_eq!(run.len(), 40);

        let decoded = classify(&run).unwrap();
        // The >=34 branch wins; the >=26 branch is never considered.
        assert!(matches!(
            decoded,
            Decoded::Reader(read) if read.format == WiegandFormat::W34 && read.value == 0x8000_0001
        ));
    }

    #[test]
    fn test_w26_with_trailing_noise() {
        let mut run = bits(VALID_W26);
        run.extend(bits("000"));

        let decoded = classify(&run).unwrap();
        assert!(matches!(
            decoded,
            Decoded::Reader(read) if read.format == WiegandFormat::W26
        ));
    }

    #[test]
    fn test_unmatched_lengths_dropped() {
        for len in [5, 10, 25] {
            assert!(classify(&vec![Bit::Zero; len]).is_none(), "len {len}");
        }
    }
}
