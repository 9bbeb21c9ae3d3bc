//! # NetSight Status API Server
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module provides the NetSight HTTP API: a small JSON service reporting
//! on devices reachable from the host's local subnet. It exposes:
//! - A quick overview (local address, subnet, the local host itself)
//! - A full subnet scan over the fixed 50-host window
//! - A single-device ping
//! - An HTML index page listing the endpoints
//!
//! ## Architecture
//!
//! The module is organized into two key components:
//! - `config.rs`: Configuration loading and validation
//! - `server_logic.rs`: Core HTTP server implementation and handlers
//!
//! The main `handle_serve` function serves as the entry point for the command,
//! processing arguments and launching the server.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Serve the API on the defaults (0.0.0.0:8080)
//! netsight serve
//!
//! # Bind to loopback only, on another port
//! netsight serve --port 9090 --host 127.0.0.1
//!
//! # Disable CORS headers
//! netsight serve --no-cors
//! ```
//!
//! Server startup flow:
//! 1. Load and merge configuration from CLI args and config file
//! 2. Build the router with the API routes and middleware
//! 3. Bind the listener and start serving with graceful shutdown
//!
use crate::core::error::Result; // Use the standard Result type for error handling.
use tracing::info; // Use the info macro for logging informational messages.

// --- Subcommand Argument Re-export ---
// Make the argument struct from the config module publicly available.
pub use config::ServeArgs;

// --- Submodule Declarations ---
// Declare the modules containing the implementation details for the server command.

/// Handles configuration loading and merging for the status API server.
pub mod config;

/// Contains the core Axum-based HTTP server implementation and handlers.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// The main entry point function for the `netsight serve` command.
/// This asynchronous function orchestrates the server setup and execution.
///
/// It performs the following steps:
/// 1. Logs the reception of the command and its arguments.
/// 2. Loads and merges the server configuration using the `config` submodule,
///    combining command-line arguments with a `.netsight.toml` file if present.
/// 3. Logs the final, effective configuration that will be used.
/// 4. Delegates the actual server execution (binding, routing, serving) to
///    `run_server` within the `server_logic` submodule.
///
/// ## Arguments
///
/// * `args`: The parsed `ServeArgs` struct containing the command-line arguments
///   provided by the user (port, host, CORS setting).
///
/// ## Returns
///
/// * `Result<()>`: Propagates the `Result` from configuration loading or server
///   execution. Returns `Ok(())` on clean shutdown, or an `Err` if configuration
///   fails or the server cannot start.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    // Load configuration using the `config` submodule.
    // This merges command-line arguments with any config file settings.
    let config = config::load_and_merge_config(args)?;
    info!("Effective server config: {:?}", config);

    // Run the server using the `server_logic` submodule.
    // This function contains the main server loop and request handling.
    server_logic::run_server(config).await?;

    // If the server logic completes without returning an error, indicate success.
    Ok(())
}
