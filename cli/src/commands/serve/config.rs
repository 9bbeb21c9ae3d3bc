//! # NetSight Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module handles configuration for the `netsight serve` command. It
//! defines the command-line arguments (`ServeArgs`), the effective runtime
//! configuration (`ServerConfig`), and the logic for merging settings from
//! three sources, in order of precedence:
//!
//! 1. Explicitly provided command-line arguments
//! 2. A `.netsight.toml` file in the working directory, if present
//! 3. Built-in defaults (port 8080, all interfaces, CORS enabled)
//!
//! ## Examples
//!
//! A `.netsight.toml` overriding the bind address:
//!
//! ```toml
//! port = 9090
//! host = "127.0.0.1"
//! enable_cors = false
//! ```
//!
//! Loading and merging configuration:
//!
//! ```rust
//! // Parse CLI args
//! let args = ServeArgs::parse();
//!
//! // Load and merge config
//! let config = load_and_merge_config(args)?;
//!
//! // Use the config
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::error::{NetsightError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{env, fs, path::Path};
use tracing::{debug, info, warn};

/// The expected name for the server-specific configuration file.
const CONFIG_FILE_NAME: &str = ".netsight.toml";

/// # Serve Command Arguments (`ServeArgs`)
///
/// Defines the command-line arguments accepted by the `netsight serve`
/// command, parsed using `clap`. These arguments allow users to configure the
/// server directly from the command line, overriding settings from the
/// configuration file or defaults.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Sets the network port the server will listen on.
    /// Defaults to port `8080`.
    #[arg(long, short, default_value_t = 8080)]
    pub port: u16,

    /// Sets the network IP address the server will bind to.
    /// Defaults to `0.0.0.0` (all available network interfaces); use
    /// `127.0.0.1` to only accept connections from the local machine.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    /// If this flag is present, CORS headers (like `Access-Control-Allow-Origin: *`)
    /// will *not* be sent. By default, CORS is enabled.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// Holds the final, consolidated configuration settings for the status API
/// server after merging command-line arguments and any settings loaded from a
/// `.netsight.toml` configuration file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The network port the server will listen on.
    pub port: u16,

    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// Indicates whether CORS headers should be enabled.
    pub enable_cors: bool,
}

/// # Configuration from File (`FileConfig`)
///
/// A temporary helper struct used solely for deserializing the
/// `.netsight.toml` file. All fields are optional (`Option<T>`) to allow
/// users to specify only the settings they wish to override from the
/// defaults. This struct is then merged with defaults and command-line
/// arguments to produce the final `ServerConfig`.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)] // Disallow unknown fields during TOML deserialization
struct FileConfig {
    port: Option<u16>,
    host: Option<String>, // Read as string to handle potential parsing errors gracefully
    enable_cors: Option<bool>,
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Orchestrates the process of determining the final server configuration.
/// It starts with the command-line arguments, overlays settings found in a
/// `.netsight.toml` file in the working directory (if present), and falls
/// back to defaults. Command-line arguments take precedence over file
/// settings *only if* they differ from the program's default values (meaning
/// the user explicitly set them); the `--no-cors` flag always overrides the
/// file when used.
///
/// ## Arguments
///
/// * `args`: The `ServeArgs` struct containing parsed command-line arguments.
///
/// ## Returns
///
/// * `Result<ServerConfig>`: The final `ServerConfig` if successful, or an
///   error if configuration loading or parsing fails.
///
/// ## Errors
///
/// Returns an error if:
/// - The current working directory cannot be determined.
/// - The configuration file exists but cannot be read or parsed.
pub fn load_and_merge_config(args: ServeArgs) -> Result<ServerConfig> {
    // Start with configuration directly derived from command-line arguments.
    let mut effective_config = ServerConfig::from_args(&args);
    let cli_defaults = ServeArgs::parse_from([""]); // Get defaults for comparison

    // The config file is looked up in the working directory the server was
    // launched from.
    let search_dir = env::current_dir().context("Failed to get current working directory")?;
    debug!("Looking for config file in: {}", search_dir.display());

    // Attempt to load configuration from the determined directory.
    if let Some(file_config) = load_config_from_dir(&search_dir)? {
        // Config file found, merge its settings. CLI args take precedence if explicitly set.
        info!(
            "Loaded settings from {}",
            search_dir.join(CONFIG_FILE_NAME).display()
        );

        // Port: Use file's value only if CLI arg was left at its default.
        if args.port == cli_defaults.port {
            effective_config.port = file_config.port;
        }
        // Host: Use file's value only if CLI arg was left at its default.
        if args.host == cli_defaults.host {
            effective_config.host = file_config.host;
        }
        // CORS: Use file's value only if --no-cors flag was *not* used.
        if !args.no_cors {
            effective_config.enable_cors = file_config.enable_cors;
        }
    } else {
        debug!("No config file found or loaded. Using arguments.");
    }

    Ok(effective_config)
}

impl ServerConfig {
    /// Builds a configuration taking every value from the parsed arguments.
    fn from_args(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors,
        }
    }
}

/// # Default Server Configuration (`impl Default for ServerConfig`)
///
/// Provides the baseline default values for the `ServerConfig` struct: the
/// fixed service contract of port 8080 on all interfaces, with CORS enabled.
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), // 0.0.0.0, all interfaces
            enable_cors: true,
        }
    }
}

/// # Load Configuration from Directory (`load_config_from_dir`)
///
/// Attempts to find, read, and parse a `.netsight.toml` configuration file
/// within the specified directory.
///
/// If the file exists and parses, returns `Ok(Some(ServerConfig))` with the
/// file's settings merged over the defaults. If the file does not exist,
/// returns `Ok(None)` - that is not an error.
///
/// ## Arguments
///
/// * `search_dir`: The directory in which to look for the `.netsight.toml` file.
///
/// ## Returns
///
/// * `Result<Option<ServerConfig>>`:
///     - `Ok(Some(config))` if the file was found and parsed successfully.
///     - `Ok(None)` if the file was not found.
///     - `Err(_)` if the file was found but could not be read or parsed.
fn load_config_from_dir(search_dir: &Path) -> Result<Option<ServerConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);

    // Check if the configuration file exists and is actually a file.
    if !config_path.exists() || !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None); // No config file found is not an error.
    }

    info!("Loading configuration from {}", config_path.display());

    // Read the file content.
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    // Parse the TOML content using the temporary FileConfig struct.
    let file_config: FileConfig = toml::from_str(&content).map_err(|e| {
        NetsightError::Config(format!(
            "Failed to parse config file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    // Get default values to fill in unspecified fields from the TOML file.
    let defaults = ServerConfig::default();

    // Parse the host IP address string, falling back to default if invalid.
    let host_ip = match file_config.host {
        Some(ref host_str) => host_str.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            defaults.host // Use default host if parsing fails.
        }),
        None => defaults.host, // Use default host if not specified in file.
    };

    // Construct the ServerConfig from file values, using defaults where needed.
    Ok(Some(ServerConfig {
        port: file_config.port.unwrap_or(defaults.port),
        host: host_ip,
        enable_cors: file_config.enable_cors.unwrap_or(defaults.enable_cors),
    }))
}

// --- Unit Tests ---

/// # Unit Tests for Server Configuration
///
/// Covers the default values, argument conversion, and the file loading and
/// merge behavior using temporary directories.
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// The baseline defaults are the service contract: 8080, all interfaces,
    /// CORS on.
    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(config.enable_cors);
    }

    /// Arguments map 1:1 onto the effective config.
    #[test]
    fn test_from_args() {
        let args = ServeArgs {
            port: 9000,
            host: "127.0.0.1".parse().unwrap(),
            no_cors: true,
        };
        let config = ServerConfig::from_args(&args);
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1".parse::<IpAddr>().unwrap());
        assert!(!config.enable_cors);
    }

    /// A missing config file is Ok(None), not an error.
    #[test]
    fn test_load_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = load_config_from_dir(temp_dir.path()).unwrap();
        assert!(loaded.is_none());
    }

    /// File values override defaults; unspecified fields keep defaults.
    #[test]
    fn test_load_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = 9090\n").unwrap();

        let config = load_config_from_dir(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(config.enable_cors);
    }

    /// An invalid host string in the file falls back to the default host
    /// with a warning instead of failing startup.
    #[test]
    fn test_load_config_invalid_host_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "host = \"not-an-address\"\n",
        )
        .unwrap();

        let config = load_config_from_dir(temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    /// Unknown keys in the file are configuration errors, not silent noise.
    #[test]
    fn test_load_config_unknown_key_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "scan_window = 254\n",
        )
        .unwrap();

        let err = load_config_from_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NetsightError>(),
            Some(NetsightError::Config(_))
        ));
    }

    /// Malformed TOML surfaces as a Config error naming the file.
    #[test]
    fn test_load_config_malformed_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "port = =\n").unwrap();

        assert!(load_config_from_dir(temp_dir.path()).is_err());
    }
}
