//! # NetSight CLI Scan Integration Tests
//!
//! File: cli/tests/scan.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! ## Overview
//!
//! Integration tests for the `netsight scan` subcommand. The live run sweeps
//! the machine's real subnet (50 probes, ~1s of socket timeouts), so it is
//! `#[ignore]`d; the default suite covers the argument surface only.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;

/// # Test Scan Help (`test_scan_help`)
///
/// Verifies `netsight scan --help` documents the JSON output flag.
#[test]
fn test_scan_help() {
    netsight_cmd()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

/// # Test Scan Live (`test_scan_live`)
///
/// Runs a real scan in JSON mode and checks the output parses as a JSON
/// array. Requires a host with a non-loopback IPv4 address and takes about
/// a second of probe timeouts.
#[test]
#[ignore] // Live network: probes the machine's actual /24 window
fn test_scan_live() {
    let output = netsight_cmd()
        .args(["scan", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("scan --json must emit valid JSON");
    assert!(parsed.is_array());
}

/// # Test Scan Rejects Unknown Flag (`test_scan_unknown_flag`)
///
/// Verifies the scan window is not configurable from the CLI.
#[test]
fn test_scan_unknown_flag() {
    netsight_cmd()
        .args(["scan", "--range", "254"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
