//! Error and warning types for uplink decoding.
//!
//! The deployed network-server formatters draw a hard line between advisory
//! conditions and fatal faults, and route them into separate envelope fields.
//! This module keeps that line in the type system:
//!
//! - [`DecodeWarning`]: advisory; decoding was skipped but the uplink is not
//!   malformed (off-port traffic such as join acknowledgements or heartbeats).
//! - [`DecodeError`]: fatal; no measurement could be produced.
//!
//! Display output is part of the wire contract: downstream dashboards match on
//! the exact message text, so the strings here must not be reworded.
//!
//! ```rust
//! use sf6wire::{DecodeError, DecodeWarning};
//!
//! let warning = DecodeWarning::unexpected_port(3);
//! assert_eq!(warning.to_string(), "Unexpected port: 3");
//!
//! let error = DecodeError::invalid_length(10, 9);
//! assert_eq!(error.to_string(), "Invalid payload length: expected 10 bytes, got 9");
//! ```

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Fatal decode faults. A fatal fault always means no measurement was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex payload: {details}")]
    InvalidHex { details: String },
}

/// Advisory conditions. A warning never carries a measurement away; it reports
/// why decoding was skipped without marking the uplink as malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeWarning {
    #[error("Unexpected port: {port}")]
    UnexpectedPort { port: u8 },
}

impl DecodeError {
    /// Helper constructor for payload length faults.
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        DecodeError::InvalidLength { expected, actual }
    }

    /// Helper constructor for hex front-end faults.
    pub fn invalid_hex(details: impl Into<String>) -> Self {
        DecodeError::InvalidHex { details: details.into() }
    }

    /// Returns whether this fault was observed on the wire, as opposed to in
    /// operator-supplied input that never reached the decoder.
    pub fn is_wire_fault(&self) -> bool {
        match self {
            DecodeError::InvalidLength { .. } => true,
            DecodeError::InvalidHex { .. } => false,
        }
    }
}

impl DecodeWarning {
    /// Helper constructor for off-port traffic.
    pub fn unexpected_port(port: u8) -> Self {
        DecodeWarning::UnexpectedPort { port }
    }
}
