//! Command-line decoder for SF6 monitor uplink payloads.
//!
//! Decodes operator-pasted hex the way the network servers would, for local
//! testing and field debugging:
//!
//! ```text
//! sf6wire 09FA157C0B72157C002A
//! sf6wire --port 2 "0x09 0xFA 0x15 0x7C 0x0B 0x72 0x15 0x7C 0x00 0x2A"
//! sf6wire --json 09FA157C0B72157C002A | jq .data
//! ```
//!
//! Exit status: 0 on a complete decode, 1 when the payload was skipped or
//! rejected, 2 when the input hex could not be parsed at all.

use anyhow::Result;
use clap::Parser;
use sf6wire::{
    DecodeOutcome, RawUplink, UPLINK_PORT, UplinkInput, adapters::chirpstack, decode,
    decode_uplink, format_hex, parse_hex_payload,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sf6wire", version, about = "Decode SF6 gas sensor LoRaWAN uplink payloads")]
struct Cli {
    /// Hex payload, e.g. "09FA157C0B72157C002A" (whitespace and 0x prefixes allowed)
    payload: String,

    /// LoRaWAN port (fPort) the uplink arrived on
    #[arg(short, long, default_value_t = UPLINK_PORT)]
    port: u8,

    /// Emit the TTN v3 uplink-formatter JSON envelope
    #[arg(long)]
    json: bool,

    /// Emit the ChirpStack v4 codec JSON envelope
    #[arg(long, conflicts_with = "json")]
    chirpstack: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bytes = match parse_hex_payload(&cli.payload) {
        Ok(bytes) => bytes,
        Err(error) => {
            // Input that never became payload bytes; refused payloads exit 1
            // from the decode paths below.
            eprintln!("Error: {}", error);
            std::process::exit(2);
        }
    };
    debug!("Parsed {} payload bytes from hex input", bytes.len());

    if cli.json {
        let output = decode_uplink(&UplinkInput { bytes, f_port: cli.port });
        println!("{}", serde_json::to_string_pretty(&output)?);
        if output.data.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if cli.chirpstack {
        let response = chirpstack::decode(cli.port, &bytes);
        println!("{}", serde_json::to_string_pretty(&response)?);
        if response.is_error() {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_report(cli.port, &bytes)
}

fn print_report(port: u8, bytes: &[u8]) -> Result<()> {
    match decode(port, bytes) {
        DecodeOutcome::Complete(measurement) => {
            let raw = RawUplink::from_bytes(bytes)?;
            let rule = "=".repeat(60);
            println!("{}", rule);
            println!("SF6 Monitor Uplink Decoder");
            println!("{}", rule);
            println!();
            println!("Payload:  {} ({} bytes, port {})", format_hex(bytes), bytes.len(), port);
            println!();
            println!("Sensor Data:");
            println!("  Density:           {:.2} kg/m³", measurement.density);
            println!("  Pressure @20°C:    {:.1} kPa", measurement.pressure_20c);
            println!(
                "  Temperature:       {:.1} K ({:.2} °C)",
                measurement.temperature_k, measurement.temperature_c
            );
            println!("  Pressure Variance: {:.1} kPa", measurement.pressure_variance);
            println!();
            println!("Modbus Counter:      {}", measurement.request_counter);
            println!();
            println!("Raw Registers:");
            println!("  Density:           {} (0x{:04X})", raw.density, raw.density);
            println!("  Pressure @20°C:    {} (0x{:04X})", raw.pressure_20c, raw.pressure_20c);
            println!("  Temperature:       {} (0x{:04X})", raw.temperature, raw.temperature);
            println!(
                "  Pressure Variance: {} (0x{:04X})",
                raw.pressure_variance, raw.pressure_variance
            );
            println!(
                "  Request Counter:   {} (0x{:04X})",
                raw.request_counter, raw.request_counter
            );
            println!("{}", rule);
            Ok(())
        }
        DecodeOutcome::Skipped(warning) => {
            eprintln!("Skipped: {}", warning);
            std::process::exit(1);
        }
        DecodeOutcome::Rejected(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
