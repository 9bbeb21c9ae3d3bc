//! # NetSight CLI Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! ## Overview
//!
//! Integration tests for the `netsight serve` subcommand, which runs the
//! status API server.
//!
//! **Note:** Testing a running server is complex. The startup test verifies
//! basic command invocation and checks for the initial banner. It does not
//! verify endpoint behavior (covered by in-process router tests in
//! `server_logic.rs`) or graceful shutdown.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;

/// # Test Serve Help (`test_serve_help`)
///
/// Verifies `netsight serve --help` documents the bind options.
#[test]
fn test_serve_help() {
    netsight_cmd()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--no-cors"));
}

/// # Test Serve Basic (`test_serve_basic`)
///
/// Verifies basic invocation of `netsight serve`.
/// Checks if the command starts and prints the startup banner.
/// Does not assert overall success as the server blocks until signalled.
#[test]
#[ignore] // TODO: needs a spawn-then-kill harness, the server blocks
fn test_serve_basic() {
    // Running the actual server in a test is tricky as it blocks.
    // Check if the command *attempts* to start without immediate arg error
    // and prints the expected startup line.
    netsight_cmd()
        .args(["serve", "--port", "0", "--host", "127.0.0.1"])
        .assert()
        .stdout(predicate::str::contains("Starting Network Status API"));
}
