//! Hex payload utilities for operator tooling
//!
//! Payload hex pasted from gateway logs and network-server consoles arrives
//! in several shapes that need normalizing before decoding:
//! - Whitespace between bytes ("09 FA 15 7C ...")
//! - "0x"/"0X" prefixes on some or all bytes
//! - Mixed upper and lower case digits
//!
//! This module cleans those up and converts between hex text and payload
//! bytes. It deliberately does NOT check the payload length: the canonical
//! 10-byte check lives in the decoder, so a short hex string parses here and
//! then fails decoding with the canonical length error.

use tracing::trace;

use crate::{DecodeError, Result};

/// Parse operator-supplied hex into payload bytes.
///
/// Accepts whitespace and "0x" prefixes anywhere in the input. Returns
/// [`DecodeError::InvalidHex`] for anything that is not hex after cleanup,
/// including an odd number of digits.
pub fn parse_hex_payload(input: &str) -> Result<Vec<u8>> {
    let cleaned = clean_hex_input(input);
    trace!("Cleaned hex input: {} chars -> {} digits", input.len(), cleaned.len());

    if cleaned.is_empty() {
        return Err(DecodeError::invalid_hex("no hex digits in input"));
    }

    hex::decode(&cleaned).map_err(|e| DecodeError::invalid_hex(e.to_string()))
}

/// Render payload bytes as uppercase hex, the format the device firmware
/// logs its transmit buffers in.
pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Strip whitespace and "0x"/"0X" prefixes without validating digits.
fn clean_hex_input(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    compact.replace("0x", "").replace("0X", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_hex() {
        let bytes = parse_hex_payload("09FA157C0B72157C002A").unwrap();
        assert_eq!(bytes, [0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A]);
    }

    #[test]
    fn test_parse_spaced_and_prefixed_hex() {
        let bytes = parse_hex_payload("0x09 0xFA 0x15 0x7C 0x0B 0x72 0x15 0x7C 0x00 0x2A").unwrap();
        assert_eq!(bytes, [0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A]);
    }

    #[test]
    fn test_parse_mixed_case_and_newlines() {
        let bytes = parse_hex_payload("09fa\n157c 0B72\t157C 002a").unwrap();
        assert_eq!(bytes, [0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A]);
    }

    #[test]
    fn test_parse_rejects_non_hex_characters() {
        let err = parse_hex_payload("09FA15ZZ").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex { .. }));
        assert!(err.to_string().starts_with("Invalid hex payload:"));
    }

    #[test]
    fn test_parse_rejects_odd_digit_count() {
        let err = parse_hex_payload("09FA1").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        for input in ["", "   ", "0x", "0x 0X"] {
            let err = parse_hex_payload(input).unwrap_err();
            assert!(matches!(err, DecodeError::InvalidHex { .. }), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_does_not_check_payload_length() {
        // Length policing belongs to the decoder, not the hex front-end.
        let bytes = parse_hex_payload("09FA").unwrap();
        assert_eq!(bytes, [0x09, 0xFA]);
    }

    #[test]
    fn test_format_hex_is_uppercase() {
        assert_eq!(format_hex(&[0x09, 0xfa, 0x00, 0x2a]), "09FA002A");
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        let payload = [0x09, 0xFA, 0x15, 0x7C, 0x0B, 0x72, 0x15, 0x7C, 0x00, 0x2A];
        assert_eq!(parse_hex_payload(&format_hex(&payload)).unwrap(), payload);
    }
}
