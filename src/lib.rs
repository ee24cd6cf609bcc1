//! Type-safe codec for SF6 gas density sensor uplinks on LoRaWAN networks.
//!
//! sf6wire decodes the fixed 10-byte telemetry payload transmitted by SF6
//! gas monitors into named, scaled engineering values, and emits the result
//! in the envelope each supported network server expects.
//!
//! # Features
//!
//! - **Canonical decoding**: one pure decode path shared by every adapter
//! - **Host adapters**: TTN v3 uplink formatter and ChirpStack v4 codec
//!   envelopes, behavior-compatible with the deployed JavaScript codecs
//! - **Wire round-trip**: payload building for device emulators and fixtures
//! - **Operator tooling**: forgiving hex parsing and a CLI decoder
//!
//! # Quick Start
//!
//! ```rust
//! use sf6wire::{DecodeOutcome, decode};
//!
//! let payload = [0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A];
//! match decode(1, &payload) {
//!     DecodeOutcome::Complete(measurement) => {
//!         assert_eq!(measurement.density, 25.54);       // kg/m³
//!         assert_eq!(measurement.temperature_k, 293.0); // K
//!         assert_eq!(measurement.request_counter, 42);
//!     }
//!     other => panic!("expected a complete decode, got {:?}", other),
//! }
//! ```
//!
//! ## Network-server envelopes
//!
//! ```rust
//! use sf6wire::{UplinkInput, decode_uplink};
//!
//! let output = decode_uplink(&UplinkInput {
//!     bytes: vec![0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A],
//!     f_port: 1,
//! });
//! assert!(output.errors.is_empty());
//! assert_eq!(output.data.unwrap().pressure_20c, 550.0); // kPa
//! ```

// Core codec modules
pub mod adapters;
mod decoder;
mod error;
mod hex_utils;
mod measurement;
mod wire;

// Core exports
pub use adapters::{UplinkInput, UplinkOutput, decode_uplink};
pub use decoder::*;
pub use error::*;
pub use hex_utils::*;
pub use measurement::*;
pub use wire::*;
