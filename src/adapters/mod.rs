//! Host adapters for the two supported network-server conventions.
//!
//! The same canonical decode ([`crate::decode`]) backs both adapters; what
//! differs is the calling convention and how outcomes fold into the result
//! envelope:
//!
//! | condition       | TTN ([`ttn`])                       | ChirpStack ([`chirpstack`]) |
//! |-----------------|-------------------------------------|-----------------------------|
//! | complete decode | `data` populated                    | flat measurement object     |
//! | off-port uplink | warning, empty `data`, not an error | fatal `{error}`             |
//! | wrong length    | error, empty `data`                 | fatal `{error}`             |
//!
//! The off-port row is the load-bearing difference: TTN deployments filter
//! warned uplinks downstream, ChirpStack deployments drop them outright.
//! Both behaviors are contractual; do not unify them.

pub mod chirpstack;
pub mod ttn;

// Re-export the TTN types; they double as the crate's general-purpose
// envelope for tooling.
pub use ttn::{UplinkInput, UplinkOutput, decode_uplink};
