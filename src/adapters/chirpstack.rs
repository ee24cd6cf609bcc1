//! ChirpStack v4 codec convention.
//!
//! ChirpStack calls the codec with the port and payload bytes positionally
//! and expects either the measurement fields at the top level of the returned
//! object or an `{error}` object. There is no warning channel in this
//! convention, so off-port traffic that TTN treats as advisory is fatal here.
//! The asymmetry mirrors the deployed codecs on both network servers and is
//! contractual.

use serde::Serialize;
use tracing::debug;

use crate::decoder::{self, DecodeOutcome};
use crate::measurement::GasMeasurement;

/// Response object handed back to ChirpStack.
///
/// Serializes untagged: a success is the flat measurement object with no
/// wrapper, a failure is `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodeResponse {
    /// Measurement fields at the top level
    Measurement(GasMeasurement),
    /// Fatal failure, including off-port traffic
    Error { error: String },
}

impl DecodeResponse {
    /// The decoded measurement, if decoding completed.
    pub fn measurement(&self) -> Option<&GasMeasurement> {
        match self {
            DecodeResponse::Measurement(measurement) => Some(measurement),
            DecodeResponse::Error { .. } => None,
        }
    }

    /// Returns whether this response reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, DecodeResponse::Error { .. })
    }
}

/// Process one uplink the way the deployed ChirpStack codec does.
pub fn decode(f_port: u8, bytes: &[u8]) -> DecodeResponse {
    let response = match decoder::decode(f_port, bytes) {
        DecodeOutcome::Complete(measurement) => DecodeResponse::Measurement(measurement),
        // No warning channel here: skipped uplinks surface as errors.
        DecodeOutcome::Skipped(warning) => DecodeResponse::Error { error: warning.to_string() },
        DecodeOutcome::Rejected(error) => DecodeResponse::Error { error: error.to_string() },
    };
    debug!(
        "ChirpStack uplink on port {}: {} bytes, error={}",
        f_port,
        bytes.len(),
        response.is_error()
    );
    response
}
