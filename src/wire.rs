//! Uplink wire format structures and parsing
//!
//! Defines the fixed binary layout of the SF6 monitor's LoRaWAN telemetry
//! uplink and provides parsing and building functions for the raw register
//! image.
//!
//! ## Payload Structure
//!
//! Every telemetry uplink is exactly 10 bytes: five consecutive big-endian
//! u16 registers mirrored from the sensor's Modbus input table:
//!
//! 1. **Density** (bytes 0-1) - raw gas density register
//! 2. **Pressure @20°C** (bytes 2-3) - temperature-compensated pressure register
//! 3. **Temperature** (bytes 4-5) - absolute temperature register
//! 4. **Pressure Variance** (bytes 6-7) - pressure variance register
//! 5. **Request Counter** (bytes 8-9) - Modbus request counter, unscaled
//!
//! ## Performance Characteristics
//!
//! - One length check, then fixed-offset reads with no further bounds tests
//! - No allocation in either direction
//! - O(1) parse and build

use crate::{DecodeError, Result};
use serde::{Deserialize, Serialize};

/// LoRaWAN port carrying telemetry uplinks. Traffic on any other port is not
/// payload data and is skipped by the decoder.
pub const UPLINK_PORT: u8 = 1;

/// Exact length of a telemetry payload in bytes.
pub const PAYLOAD_LEN: usize = 10;

// Byte offsets of the registers within the payload
const DENSITY_OFFSET: usize = 0;
const PRESSURE_20C_OFFSET: usize = 2;
const TEMPERATURE_OFFSET: usize = 4;
const PRESSURE_VARIANCE_OFFSET: usize = 6;
const REQUEST_COUNTER_OFFSET: usize = 8;

/// Raw register image carried by a telemetry uplink.
///
/// Values are exactly as transmitted: unsigned 16-bit registers with no
/// scaling applied. Conversion to engineering units happens in
/// [`GasMeasurement`](crate::GasMeasurement).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUplink {
    /// Gas density register (0.01 kg/m³ per count)
    pub density: u16,
    /// Temperature-compensated pressure register (0.1 kPa per count)
    pub pressure_20c: u16,
    /// Absolute temperature register (0.1 K per count)
    pub temperature: u16,
    /// Pressure variance register (0.1 kPa per count)
    pub pressure_variance: u16,
    /// Modbus request counter, transmitted unscaled
    pub request_counter: u16,
}

impl RawUplink {
    /// Parse the raw register image out of a received payload.
    ///
    /// The only validation is the length check: every 10-byte payload is a
    /// structurally valid register image, and the full 0..=65535 range is
    /// meaningful for every register.
    pub fn from_bytes(payload: &[u8]) -> Result<Self> {
        let bytes: &[u8; PAYLOAD_LEN] = payload
            .try_into()
            .map_err(|_| DecodeError::invalid_length(PAYLOAD_LEN, payload.len()))?;

        Ok(Self {
            density: read_u16_be(bytes, DENSITY_OFFSET),
            pressure_20c: read_u16_be(bytes, PRESSURE_20C_OFFSET),
            temperature: read_u16_be(bytes, TEMPERATURE_OFFSET),
            pressure_variance: read_u16_be(bytes, PRESSURE_VARIANCE_OFFSET),
            request_counter: read_u16_be(bytes, REQUEST_COUNTER_OFFSET),
        })
    }

    /// Build the wire image for this register set.
    ///
    /// Inverse of [`RawUplink::from_bytes`]; lets device emulators and test
    /// fixtures produce payloads byte-identical to sensor output.
    pub fn to_bytes(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        write_u16_be(&mut payload, DENSITY_OFFSET, self.density);
        write_u16_be(&mut payload, PRESSURE_20C_OFFSET, self.pressure_20c);
        write_u16_be(&mut payload, TEMPERATURE_OFFSET, self.temperature);
        write_u16_be(&mut payload, PRESSURE_VARIANCE_OFFSET, self.pressure_variance);
        write_u16_be(&mut payload, REQUEST_COUNTER_OFFSET, self.request_counter);
        payload
    }
}

// Register offsets are compile-time constants within the fixed payload, so
// the indexing below cannot go out of bounds.
fn read_u16_be(data: &[u8; PAYLOAD_LEN], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

fn write_u16_be(data: &mut [u8; PAYLOAD_LEN], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}
