use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Keypad digit must be 0-15, got {digit}")]
    InvalidKeypadDigit { digit: u8 },

    #[error("Card value {value} does not fit the {payload_bits}-bit payload of a {format} frame")]
    CardValueOutOfRange {
        value: u64,
        payload_bits: usize,
        format: String,
    },

    #[error("Unrecognized frame length: {bits} bits")]
    UnrecognizedFrameLength { bits: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
