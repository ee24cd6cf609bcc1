//! Canonical uplink decoding shared by every host adapter.
//!
//! ## Decode Pipeline
//!
//! Validation order is fixed and short-circuiting:
//!
//! 1. **Port check** - traffic on any port other than [`UPLINK_PORT`] is
//!    skipped with a warning, even if the payload is the wrong length.
//! 2. **Length check** - anything but exactly [`PAYLOAD_LEN`](crate::PAYLOAD_LEN)
//!    bytes is rejected; there are no partial decodes.
//! 3. **Field extraction** - all five registers are read and scaled; a
//!    10-byte payload on the right port can never fail.
//!
//! [`decode`] is a pure function: no logging, no counters, no shared state.
//! The host adapters own all observability, so identical inputs always
//! produce identical outcomes here.

use crate::error::{DecodeError, DecodeWarning};
use crate::measurement::GasMeasurement;
use crate::wire::{RawUplink, UPLINK_PORT};

/// Outcome of decoding one uplink.
///
/// The three variants partition every possible input: a measurement is only
/// ever present on `Complete`, so no outcome can simultaneously carry data
/// and a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// Payload decoded; all six measurement fields are populated.
    Complete(GasMeasurement),
    /// Uplink arrived on a non-telemetry port and was not decoded.
    Skipped(DecodeWarning),
    /// Payload is malformed and no measurement was produced.
    Rejected(DecodeError),
}

/// Decode a telemetry uplink received on the given LoRaWAN port.
///
/// Both host adapters call through here; they differ only in how they fold
/// the outcome into their envelope (see [`adapters`](crate::adapters)).
pub fn decode(f_port: u8, payload: &[u8]) -> DecodeOutcome {
    if f_port != UPLINK_PORT {
        return DecodeOutcome::Skipped(DecodeWarning::unexpected_port(f_port));
    }

    match RawUplink::from_bytes(payload) {
        Ok(raw) => DecodeOutcome::Complete(GasMeasurement::from(raw)),
        Err(error) => DecodeOutcome::Rejected(error),
    }
}

impl DecodeOutcome {
    /// The decoded measurement, if the payload decoded completely.
    pub fn measurement(&self) -> Option<&GasMeasurement> {
        match self {
            DecodeOutcome::Complete(measurement) => Some(measurement),
            _ => None,
        }
    }

    /// Returns whether the payload decoded completely.
    pub fn is_complete(&self) -> bool {
        matches!(self, DecodeOutcome::Complete(_))
    }

    /// Returns whether decoding failed fatally.
    pub fn is_rejected(&self) -> bool {
        matches!(self, DecodeOutcome::Rejected(_))
    }

    /// Advisory messages in production order, shaped for envelope emission.
    pub fn warnings(&self) -> Vec<String> {
        match self {
            DecodeOutcome::Skipped(warning) => vec![warning.to_string()],
            _ => Vec::new(),
        }
    }

    /// Fatal messages in production order, shaped for envelope emission.
    pub fn errors(&self) -> Vec<String> {
        match self {
            DecodeOutcome::Rejected(error) => vec![error.to_string()],
            _ => Vec::new(),
        }
    }
}
