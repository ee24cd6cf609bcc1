//! Engineering-unit measurement produced from a raw register image.
//!
//! Scaling follows the sensor datasheet: decimal scale factors applied to
//! the unsigned register values, with Celsius derived from the scaled Kelvin
//! reading. Serialized field names are pinned to the keys the deployed
//! dashboards ingest, independent of the Rust field names.

use serde::{Deserialize, Serialize};

use crate::wire::RawUplink;

/// Density register scale, kg/m³ per count.
pub const DENSITY_SCALE: f64 = 0.01;
/// Pressure register scale, kPa per count.
pub const PRESSURE_SCALE: f64 = 0.1;
/// Temperature register scale, K per count.
pub const TEMPERATURE_SCALE: f64 = 0.1;
/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// A fully decoded SF6 measurement in engineering units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasMeasurement {
    /// Gas density in kg/m³
    #[serde(rename = "sf6_density")]
    pub density: f64,
    /// Temperature-compensated pressure at 20°C in kPa
    #[serde(rename = "sf6_pressure_20c")]
    pub pressure_20c: f64,
    /// Absolute temperature in K
    #[serde(rename = "sf6_temperature_k")]
    pub temperature_k: f64,
    /// Temperature in °C, derived from the Kelvin reading
    #[serde(rename = "sf6_temperature_c")]
    pub temperature_c: f64,
    /// Pressure variance in kPa
    #[serde(rename = "sf6_pressure_var")]
    pub pressure_variance: f64,
    /// Modbus request counter, unscaled
    #[serde(rename = "modbus_counter")]
    pub request_counter: u16,
}

impl From<RawUplink> for GasMeasurement {
    fn from(raw: RawUplink) -> Self {
        // Celsius derives from the already-scaled Kelvin value; both fields
        // always describe the same register read.
        let temperature_k = f64::from(raw.temperature) * TEMPERATURE_SCALE;
        Self {
            density: f64::from(raw.density) * DENSITY_SCALE,
            pressure_20c: f64::from(raw.pressure_20c) * PRESSURE_SCALE,
            temperature_k,
            temperature_c: temperature_k - KELVIN_OFFSET,
            pressure_variance: f64::from(raw.pressure_variance) * PRESSURE_SCALE,
            request_counter: raw.request_counter,
        }
    }
}
