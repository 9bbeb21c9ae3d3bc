//! # NetSight Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the NetSight CLI.
//! It serves as the central point for importing and re-exporting command modules
//! to make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent commands (`serve`, `scan`)
//! - Each command defines its own arguments structure and handler function
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `serve`: Runs the HTTP status API (routes, handlers, config merge)
//! - `scan`: One-shot subnet scan printed to the terminal
//!

/// One-shot subnet scan command, printing results to stdout.
pub mod scan;
/// HTTP status API command. Includes configuration and server logic.
pub mod serve;
