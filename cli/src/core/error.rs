//! # NetSight Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the NetSight application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `NetsightError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the failure domains the service can actually hit:
//! - Local address resolution (no usable non-loopback IPv4 address)
//! - Configuration loading (.netsight.toml)
//!
//! Transient network failures during probing are deliberately NOT errors:
//! a connect timeout or refusal is a normal "offline" classification and is
//! handled inside the probe itself.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if candidates.is_empty() {
//!     return Err(NetsightError::AddressResolution("no non-loopback IPv4 address found".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the NetSight application.
#[derive(Error, Debug)]
pub enum NetsightError {
    #[error("Address resolution error: {0}")]
    AddressResolution(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
