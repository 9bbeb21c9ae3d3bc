//! # NetSight Subnet Scanner (`common::network::scan`)
//!
//! File: cli/src/common/network/scan.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! The concurrent fan-out at the heart of NetSight. Given the host's own
//! address, the scanner enumerates a fixed 50-address window of the local
//! /24 (host octets 1 through 50), probes every candidate concurrently, and
//! returns the subset that answered.
//!
//! ## Architecture
//!
//! One tokio task per candidate address - 50 in flight, bounded only by the
//! window itself. Each task probes independently; tasks that classify their
//! host online push the `Device` into a single list guarded by a
//! mutual-exclusion lock. The scan joins ALL tasks before returning: there
//! is no early exit and no cancellation path. Wall-clock latency is bounded
//! by the per-probe budget (two 500 ms transport attempts plus resolver
//! latency), not by the width of the fan-out.
//!
//! Result ordering is lock-acquisition order, i.e. completion order, which
//! is non-deterministic across runs. Only status is meaningful to callers.
//!
//! The window is fixed at 50 for response-time predictability; hosts 51-254
//! are never observed. If the window ever becomes configurable, the
//! launch-all/join-all below should gain a concurrency-limiting semaphore.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::network::scan;
//!
//! # async fn run_example() {
//! let online = scan::scan_subnet("192.168.1.42").await;
//! println!("{} hosts answered", online.len());
//! # }
//! ```
//!
use super::probe::{self, Device};
use futures_util::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Number of candidate host octets scanned (1 through `SCAN_WINDOW`),
/// regardless of subnet occupancy.
pub const SCAN_WINDOW: u8 = 50;

/// # Scan the Local Subnet (`scan_subnet`)
///
/// Probes host octets 1..=50 of `local_ip`'s /24 and returns the devices
/// classified online, in completion order. Returns an empty list when
/// `local_ip` is not a well-formed dotted quad.
///
/// ## Arguments
///
/// * `local_ip`: The host's own IPv4 address, used only for its first three
///   octets.
///
/// ## Returns
///
/// * `Vec<Device>`: Online devices only; at most `SCAN_WINDOW` entries.
pub async fn scan_subnet(local_ip: &str) -> Vec<Device> {
    scan_subnet_with(local_ip, |ip: String| async move { probe::probe(&ip).await }).await
}

/// # Scan With an Injected Prober (`scan_subnet_with`)
///
/// The fan-out/aggregation engine behind `scan_subnet`, generic over the
/// per-address prober so the aggregation properties (no lost appends, fixed
/// candidate window, online-only results) are testable without opening
/// sockets.
///
/// ## Arguments
///
/// * `local_ip`: The host's own IPv4 address; only the /24 prefix is used.
/// * `prober`: Called once per candidate address; its `Device` is kept only
///   when classified online.
///
/// ## Returns
///
/// * `Vec<Device>`: The accumulated online devices, in completion order.
pub async fn scan_subnet_with<F, Fut>(local_ip: &str, prober: F) -> Vec<Device>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Device> + Send + 'static,
{
    // Malformed input degrades to an empty scan rather than an error.
    let parts: Vec<&str> = local_ip.split('.').collect();
    if parts.len() != 4 {
        debug!("Not scanning: '{}' is not a dotted quad", local_ip);
        return Vec::new();
    }
    let base = format!("{}.{}.{}", parts[0], parts[1], parts[2]);

    info!(
        "Scanning {}.1 through {}.{} ({} concurrent probes)",
        base, base, SCAN_WINDOW, SCAN_WINDOW
    );

    // The single shared mutable resource of the scan: every other piece of
    // state is task-local.
    let devices: Arc<Mutex<Vec<Device>>> = Arc::new(Mutex::new(Vec::new()));
    let prober = Arc::new(prober);

    let mut tasks = Vec::with_capacity(SCAN_WINDOW as usize);
    for host in 1..=SCAN_WINDOW {
        let ip = format!("{}.{}", base, host);
        let devices = Arc::clone(&devices);
        let prober = Arc::clone(&prober);

        tasks.push(tokio::spawn(async move {
            let device = (*prober)(ip).await;
            // Only online probes touch the shared list.
            if device.is_online() {
                devices.lock().await.push(device);
            }
        }));
    }

    // Full join barrier: the scan does not return until every probe has
    // completed or timed out.
    join_all(tasks).await;

    let found = Arc::try_unwrap(devices)
        .map(Mutex::into_inner)
        .unwrap_or_default();
    info!("Scan complete: {} device(s) online", found.len());
    found
}

// --- Unit Tests ---
