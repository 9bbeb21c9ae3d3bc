//! # NetSight Reachability Probe (`common::network::probe`)
//!
//! File: cli/src/common/network/probe.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Single-host reachability checking. Given an IPv4 address string, `probe`
//! classifies the host as online or offline within a bounded time budget and
//! attaches a best-effort hostname. The output shape is deterministic; the
//! status depends on live network state.
//!
//! ## Architecture
//!
//! A probe is two transport attempts and an optional lookup:
//!
//! 1. TCP connect to port 80, 500 ms timeout. Success means online.
//! 2. Otherwise, UDP "connect" to port 53, same 500 ms timeout. Because UDP
//!    is connectionless, success here means the local stack accepted the
//!    association, not that the remote host answered - a deliberately loose,
//!    lower-confidence liveness signal.
//! 3. If online by either path, a reverse DNS lookup through the platform
//!    resolver supplies the hostname. The resolver applies its own timeout;
//!    the 500 ms budget does not cover this step.
//!
//! Connect timeouts and refusals are normal "offline" classifications, never
//! errors. There are no retries beyond the two transport attempts.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::network::probe;
//!
//! # async fn run_example() {
//! let device = probe::probe("192.168.1.1").await;
//! println!("{} is {:?}", device.ip, device.status);
//! # }
//! ```
//!
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;
use tracing::{debug, trace};

/// Hard timeout applied independently to each transport attempt.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// TCP port used for the stream-oriented handshake attempt.
const TCP_PROBE_PORT: u16 = 80;

/// UDP port used for the connectionless fallback attempt.
const UDP_PROBE_PORT: u16 = 53;

/// # Device Status (`DeviceStatus`)
///
/// Two-state reachability classification, serialized as the lowercase
/// strings `"online"` / `"offline"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
}

/// # Device (`Device`)
///
/// The result of probing a single address. Created fresh per probe
/// invocation, never persisted, immutable once returned.
///
/// Field semantics:
/// - `ip`: the probed address, echoed back verbatim.
/// - `hostname`: reverse-DNS name when one resolves, otherwise the ip string.
/// - `status`: online/offline classification.
/// - `last_seen`: RFC 3339 timestamp of this observation when online, empty
///   string when the host was never observed online.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub ip: String,
    pub hostname: String,
    pub status: DeviceStatus,
    pub last_seen: String,
}

impl Device {
    /// Baseline device record for an address: offline, hostname falls back
    /// to the ip string, never seen.
    pub fn offline(ip: &str) -> Self {
        Self {
            ip: ip.to_string(),
            hostname: ip.to_string(),
            status: DeviceStatus::Offline,
            last_seen: String::new(),
        }
    }

    /// Convenience check used by the scanner's online-only filter.
    pub fn is_online(&self) -> bool {
        self.status == DeviceStatus::Online
    }
}

/// # Probe One Host (`probe`)
///
/// Classifies a single address as online or offline. See the module docs for
/// the two-phase transport algorithm. Malformed addresses simply fail both
/// transport attempts and come back offline; callers never see an error.
///
/// Side effects: opens and closes one or two transient sockets, and performs
/// a reverse DNS lookup for hosts classified online.
///
/// ## Arguments
///
/// * `ip`: The address to probe, as a dotted-quad string.
///
/// ## Returns
///
/// * `Device`: The observation record for this probe invocation.
pub async fn probe(ip: &str) -> Device {
    let mut device = Device::offline(ip);

    // Lazy `||`: the UDP fallback only runs when the TCP attempt failed.
    if tcp_handshake(ip).await || udp_handshake(ip).await {
        device.status = DeviceStatus::Online;
        device.last_seen = now_rfc3339();

        // Online hosts get a best-effort hostname; on any resolver failure
        // the hostname stays the ip string set by `Device::offline`.
        if let Some(name) = reverse_lookup(ip).await {
            device.hostname = name;
        }
    }

    trace!("Probe result for {}: {:?}", ip, device.status);
    device
}

/// Attempts a TCP connection to `ip:80` under the probe timeout. A completed
/// handshake is released immediately; only the classification is kept.
async fn tcp_handshake(ip: &str) -> bool {
    let addr: SocketAddr = match format!("{}:{}", ip, TCP_PROBE_PORT).parse() {
        Ok(addr) => addr,
        Err(_) => return false,
    };

    match timeout(PROBE_TIMEOUT, TcpStream::connect(addr)).await {
        // Connected: drop the stream right away, the handshake was the signal.
        Ok(Ok(_stream)) => true,
        // Refused/unreachable within the budget, or timed out.
        Ok(Err(_)) | Err(_) => false,
    }
}

/// Attempts a UDP association with `ip:53` under the probe timeout. Success
/// means the local stack accepted the association, not that the remote host
/// responded; callers treat this branch as a lower-confidence signal.
async fn udp_handshake(ip: &str) -> bool {
    let addr: SocketAddr = match format!("{}:{}", ip, UDP_PROBE_PORT).parse() {
        Ok(addr) => addr,
        Err(_) => return false,
    };

    let socket = match UdpSocket::bind("0.0.0.0:0").await {
        Ok(socket) => socket,
        Err(_) => return false,
    };

    matches!(timeout(PROBE_TIMEOUT, socket.connect(addr)).await, Ok(Ok(())))
}

/// # Reverse Hostname Lookup (`reverse_lookup`)
///
/// Resolves an address back to its first hostname through the platform
/// resolver (`getnameinfo`). The resolver call is blocking and applies its
/// own timeout, so it runs on the blocking thread pool rather than the async
/// workers. Returns `None` on malformed input or any resolver failure.
pub async fn reverse_lookup(ip: &str) -> Option<String> {
    let addr: IpAddr = ip.parse().ok()?;

    let result = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&addr).ok())
        .await
        .ok()
        .flatten();

    if result.is_none() {
        debug!("No reverse DNS entry for {}", ip);
    }
    result
}

/// Current time as an RFC 3339 string with seconds precision and a `Z`
/// suffix - the `last_seen` wire format.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

// --- Unit Tests ---
