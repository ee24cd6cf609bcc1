//! The Things Network v3 uplink formatter convention.
//!
//! TTN calls the formatter with the payload bytes and fPort and expects a
//! `{data, warnings, errors}` envelope back. Off-port traffic is advisory
//! here: the envelope carries a warning and an empty `data` object, and the
//! uplink continues through the pipeline.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::decoder;
use crate::measurement::GasMeasurement;

/// Input object the network server hands to the uplink formatter.
///
/// Extra envelope fields (recvTime and friends) are ignored on
/// deserialization; only the payload bytes and the port matter here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UplinkInput {
    /// Raw payload bytes after LoRaWAN decryption
    pub bytes: Vec<u8>,
    /// LoRaWAN port the uplink arrived on
    #[serde(rename = "fPort")]
    pub f_port: u8,
}

/// Envelope returned to the network server.
///
/// All three fields are always present. `data` serializes as an empty JSON
/// object (never `null`) when no measurement was produced, which is what the
/// downstream storage integrations expect.
#[derive(Debug, Clone, Serialize)]
pub struct UplinkOutput {
    /// Decoded measurement, or an empty object when decoding did not complete
    #[serde(serialize_with = "serialize_empty_as_object")]
    pub data: Option<GasMeasurement>,
    /// Advisory messages, in production order
    pub warnings: Vec<String>,
    /// Fatal messages, in production order
    pub errors: Vec<String>,
}

/// Process one uplink the way the deployed TTN formatter does.
pub fn decode_uplink(input: &UplinkInput) -> UplinkOutput {
    let outcome = decoder::decode(input.f_port, &input.bytes);
    debug!(
        "TTN uplink on port {}: {} bytes, complete={}",
        input.f_port,
        input.bytes.len(),
        outcome.is_complete()
    );

    UplinkOutput {
        data: outcome.measurement().copied(),
        warnings: outcome.warnings(),
        errors: outcome.errors(),
    }
}

fn serialize_empty_as_object<S>(
    data: &Option<GasMeasurement>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match data {
        Some(measurement) => measurement.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
