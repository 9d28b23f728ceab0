use crate::{
    Result,
    constants::{MAX_KEYPAD_DIGIT, W26_FRAME_BITS, W34_FRAME_BITS},
    error::Error,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical Wiegand data line.
///
/// The protocol uses two wires: a pulse on DATA0 signals a 0 bit, a pulse
/// on DATA1 signals a 1 bit. The line identity is the only information a
/// pulse carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// The DATA0 wire; a rising edge here is a 0 bit.
    Data0,
    /// The DATA1 wire; a rising edge here is a 1 bit.
    Data1,
}

impl Line {
    /// The bit value a pulse on this line encodes.
    #[inline]
    #[must_use]
    pub fn bit(self) -> Bit {
        match self {
            Line::Data0 => Bit::Zero,
            Line::Data1 => Bit::One,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::Data0 => write!(f, "D0"),
            Line::Data1 => write!(f, "D1"),
        }
    }
}

/// A single decoded signal bit, immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Numeric value of the bit (0 or 1).
    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns `true` for a set bit.
    #[inline]
    #[must_use]
    pub fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<Line> for Bit {
    fn from(line: Line) -> Self {
        line.bit()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Recognized reader frame format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WiegandFormat {
    /// Standard 26-bit format: 24 payload bits framed by two parity bits.
    W26,
    /// 34-bit format: 32 payload bits framed by two parity bits.
    W34,
}

impl WiegandFormat {
    /// Create a format from a total frame bit length.
    ///
    /// # Errors
    /// Returns `Error::UnrecognizedFrameLength` for lengths other than
    /// 26 or 34.
    pub fn from_total_bits(bits: usize) -> Result<Self> {
        match bits {
            W26_FRAME_BITS => Ok(WiegandFormat::W26),
            W34_FRAME_BITS => Ok(WiegandFormat::W34),
            _ => Err(Error::UnrecognizedFrameLength { bits }),
        }
    }

    /// Total number of bits in a frame of this format, parity included.
    #[inline]
    #[must_use]
    pub fn total_bits(self) -> usize {
        match self {
            WiegandFormat::W26 => W26_FRAME_BITS,
            WiegandFormat::W34 => W34_FRAME_BITS,
        }
    }

    /// Number of payload bits (total minus the two parity bits).
    #[inline]
    #[must_use]
    pub fn payload_bits(self) -> usize {
        self.total_bits() - 2
    }

    /// Largest payload value this format can encode.
    #[inline]
    #[must_use]
    pub fn max_payload_value(self) -> u64 {
        (1u64 << self.payload_bits()) - 1
    }
}

impl fmt::Display for WiegandFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WiegandFormat::W26 => write!(f, "Wiegand-26"),
            WiegandFormat::W34 => write!(f, "Wiegand-34"),
        }
    }
}

/// A decoded keypad digit.
///
/// Produced from a 4-bit frame; the digit is the binary value of the four
/// bits, so `0-9` for numeric keys and `10-15` for the extra keys some
/// keypads map to `*`/`#`/function codes. This crate does not interpret
/// the digit further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadPress {
    /// Decoded digit value (0-15).
    pub digit: u8,

    /// When the frame was decoded.
    pub timestamp: DateTime<Utc>,
}

impl KeypadPress {
    /// Create a keypad press with the current timestamp.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeypadDigit` if the digit is greater
    /// than 15.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiegand_core::KeypadPress;
    ///
    /// let press = KeypadPress::new(11).unwrap();
    /// assert_eq!(press.digit, 11);
    ///
    /// assert!(KeypadPress::new(16).is_err());
    /// ```
    pub fn new(digit: u8) -> Result<Self> {
        if digit > MAX_KEYPAD_DIGIT {
            return Err(Error::InvalidKeypadDigit { digit });
        }
        Ok(Self {
            digit,
            timestamp: Utc::now(),
        })
    }
}

impl fmt::Display for KeypadPress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "keypad {}", self.digit)
    }
}

/// A decoded, parity-validated reader code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRead {
    /// Payload value, MSB-first, parity bits stripped.
    pub value: u64,

    /// Frame format the value was decoded from.
    pub format: WiegandFormat,

    /// When the frame was decoded.
    pub timestamp: DateTime<Utc>,
}

impl CardRead {
    /// Create a card read with the current timestamp.
    ///
    /// # Errors
    /// Returns `Error::CardValueOutOfRange` if the value does not fit the
    /// format's payload width.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiegand_core::{CardRead, WiegandFormat};
    ///
    /// let read = CardRead::new(0x40_0001, WiegandFormat::W26).unwrap();
    /// assert_eq!(read.value, 0x40_0001);
    ///
    /// // 24 payload bits cannot hold a 25-bit value
    /// assert!(CardRead::new(1 << 24, WiegandFormat::W26).is_err());
    /// ```
    pub fn new(value: u64, format: WiegandFormat) -> Result<Self> {
        if value > format.max_payload_value() {
            return Err(Error::CardValueOutOfRange {
                value,
                payload_bits: format.payload_bits(),
                format: format.to_string(),
            });
        }
        Ok(Self {
            value,
            format,
            timestamp: Utc::now(),
        })
    }
}

impl fmt::Display for CardRead {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} card {}", self.format, self.value)
    }
}
