//! Core types and protocol constants for the Wiegand decoder.
//!
//! This crate defines the shared vocabulary of the workspace: physical
//! line identities, decoded bit values, the recognized frame formats, and
//! the decoded result types emitted to consumers. It performs no I/O and
//! has no async surface; the decoding state machine lives in
//! `wiegand-decoder` and the GPIO collaborator layer in `wiegand-gpio`.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
