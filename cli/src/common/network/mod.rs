//! # NetSight Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module centralizes the network functionality of NetSight: finding the
//! host's own address, checking whether a single host answers, and sweeping
//! the local /24 for reachable devices. The HTTP layer in `commands::serve`
//! and the terminal front-end in `commands::scan` are both thin callers of
//! these submodules.
//!
//! ## Architecture
//!
//! The module is organized into three submodules, leaves first:
//!
//! - **`discovery`**: Local address resolution - the first non-loopback IPv4
//!   address across all interfaces, and the derived `/24` subnet string.
//! - **`probe`**: Single-host reachability. A TCP:80 connect attempt with a
//!   UDP:53 fallback, each bounded by a 500 ms timeout, plus a best-effort
//!   reverse DNS lookup for online hosts. Defines the `Device` wire type.
//! - **`scan`**: The concurrent fan-out. One task per candidate address over
//!   a fixed 50-host window, results funneled into a lock-guarded list, full
//!   join before returning.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network::{discovery, probe, scan};
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let local_ip = discovery::local_ipv4()?;
//! let subnet = discovery::subnet_of(&local_ip);
//!
//! // Probe one host...
//! let device = probe::probe("192.168.1.1").await;
//!
//! // ...or sweep the whole window.
//! let online = scan::scan_subnet(&local_ip).await;
//! # Ok(())
//! # }
//! ```
//!

/// Local address resolution (non-loopback IPv4 detection, subnet derivation).
pub mod discovery;
/// Single-host reachability probing and the `Device` wire type.
pub mod probe;
/// Concurrent subnet scanning over the fixed 50-host window.
pub mod scan;
