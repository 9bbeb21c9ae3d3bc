//! # NetSight Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for shared
//! utility modules used throughout the NetSight CLI application. Centralizing
//! these utilities under the `common::` namespace keeps command-specific
//! logic (`commands::`) separate from the reusable machinery it drives.
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`) for its
//! submodules:
//!
//! - **`network`**: The network core - local address discovery, single-host
//!   reachability probing, and the concurrent subnet scanner. This is where
//!   all of the timing- and concurrency-sensitive logic lives.
//!
//! ## Usage
//!
//! Command handlers import specific functionality directly from the required
//! submodule within `common`.
//!
//! ```rust
//! use crate::common::network::{discovery, probe, scan};
//! use crate::core::error::Result;
//!
//! # async fn run_example() -> Result<()> {
//! let local_ip = discovery::local_ipv4()?;
//! let devices = scan::scan_subnet(&local_ip).await;
//! println!("{} devices online in {}", devices.len(), discovery::subnet_of(&local_ip));
//! # Ok(())
//! # }
//! ```
//!

/// Network utilities: address discovery, reachability probing, subnet scanning.
pub mod network;
