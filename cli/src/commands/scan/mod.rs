//! # NetSight Scan Command
//!
//! File: cli/src/commands/scan/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! One-shot terminal front-end over the subnet scanner: resolve the local
//! address, sweep the 50-host window, print what answered. The same engine
//! backs `GET /api/network/scan`; this command exists for quick checks
//! without standing up the HTTP server.
//!
//! ## Examples
//!
//! ```bash
//! # Human-readable scan of the local /24 window
//! netsight scan
//!
//! # Same scan as a JSON array (pipe into jq etc.)
//! netsight scan --json
//! ```
//!
use crate::common::network::{discovery, scan};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Scan Command Arguments (`ScanArgs`)
///
/// Defines the command-line arguments accepted by the `netsight scan`
/// command, parsed using `clap`.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Print the scan result as a pretty JSON array instead of text lines.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Scan Command (`handle_scan`)
///
/// The main entry point function for the `netsight scan` command.
///
/// It performs the following steps:
/// 1. Resolves the local IPv4 address (an offline host is an error here,
///    unlike the silent degradation inside the scanner).
/// 2. Runs the concurrent subnet scan over the fixed window.
/// 3. Prints the online devices, as text lines or JSON per the arguments.
///
/// ## Arguments
///
/// * `args`: The parsed `ScanArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after printing results (an empty scan is still
///   a success), or an `Err` if no local address could be resolved.
pub async fn handle_scan(args: ScanArgs) -> Result<()> {
    info!("Handling scan command with args: {:?}", args);

    let local_ip =
        discovery::local_ipv4().context("Cannot scan without a local IPv4 address")?;
    let subnet = discovery::subnet_of(&local_ip);

    if !args.json {
        println!(
            "🛰️  Scanning {} from {} ({} candidate hosts)...",
            subnet,
            local_ip,
            scan::SCAN_WINDOW
        );
    }

    let devices = scan::scan_subnet(&local_ip).await;

    if args.json {
        // Machine-readable output goes to stdout alone; logging stays on stderr.
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    if devices.is_empty() {
        println!("No devices responded in the scan window.");
    } else {
        println!("\n{} device(s) online:", devices.len());
        for device in &devices {
            println!(
                "  🟢 {:<15} {:<30} last seen {}",
                device.ip, device.hostname, device.last_seen
            );
        }
    }

    Ok(())
}
