//! # NetSight Address Discovery (`common::network::discovery`)
//!
//! File: cli/src/common/network/discovery.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/netsight
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Local address resolution for NetSight. Two small operations live here:
//! finding the host's own non-loopback IPv4 address by walking the system's
//! network interfaces, and deriving the `/24` subnet string from a dotted-quad
//! address. Everything else in the network core builds on these two answers.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::network::discovery;
//!
//! # fn run_example() -> anyhow::Result<()> {
//! let local_ip = discovery::local_ipv4()?; // e.g. "192.168.1.42"
//! let subnet = discovery::subnet_of(&local_ip); // "192.168.1.0/24"
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{NetsightError, Result};
use pnet::datalink::{self, NetworkInterface};
use std::net::IpAddr;
use tracing::debug;

/// # Get Local IPv4 Address (`local_ipv4`)
///
/// Determines the host's own IPv4 address by inspecting all local network
/// interface addresses and selecting the first one that is not a loopback
/// address. A host that is offline (loopback only) has no usable address,
/// which is an error the HTTP layer reports as a 500.
///
/// No side effects: this only reads the interface table.
///
/// ## Returns
///
/// * `Result<String>`: The dotted-quad address string (e.g. `"192.168.1.42"`).
///
/// ## Errors
///
/// Returns `NetsightError::AddressResolution` if no non-loopback IPv4 address
/// exists on any interface.
pub fn local_ipv4() -> Result<String> {
    first_ipv4(&datalink::interfaces())
}

/// Walks the given interfaces in order and returns the first non-loopback
/// IPv4 address found. Split out from `local_ipv4` so the selection rule can
/// be tested against hand-built interface tables.
fn first_ipv4(interfaces: &[NetworkInterface]) -> Result<String> {
    let found = interfaces
        .iter()
        .flat_map(|iface| iface.ips.iter())
        .find_map(|network| match network.ip() {
            // Loopback and IPv6 addresses are both skipped; the scan window
            // only makes sense for a routable IPv4 /24.
            IpAddr::V4(v4) if !v4.is_loopback() => Some(v4.to_string()),
            _ => None,
        });

    match found {
        Some(ip) => {
            debug!("Resolved local IPv4 address: {}", ip);
            Ok(ip)
        }
        None => Err(NetsightError::AddressResolution(
            "no non-loopback IPv4 address found".to_string(),
        )
        .into()),
    }
}

/// # Derive Subnet String (`subnet_of`)
///
/// Splits a dotted-quad address into its four octets and, when exactly four
/// parts are present, returns the first three joined with a literal `.0/24`
/// suffix (e.g. `"192.168.1.0/24"`). Any other shape degrades to an empty
/// string rather than an error.
///
/// Pure, total function: it never fails and performs no I/O.
///
/// ## Arguments
///
/// * `ip`: The address string to derive the subnet from.
///
/// ## Returns
///
/// * `String`: The `/24` CIDR string, or `""` for malformed input.
pub fn subnet_of(ip: &str) -> String {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() == 4 {
        format!("{}.{}.{}.0/24", parts[0], parts[1], parts[2])
    } else {
        String::new()
    }
}

// --- Unit Tests ---

/// # Unit Tests for Address Discovery
///
/// The selection rule is tested against hand-built interface tables so the
/// tests do not depend on the machine they run on; `local_ipv4` itself gets
/// a smoke test only.
#[cfg(test)]
mod tests {
    use super::*;
    use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
    use std::net::{Ipv4Addr, Ipv6Addr};

    /// Builds a minimal `NetworkInterface` carrying the given addresses.
    fn iface(name: &str, index: u32, ips: Vec<IpNetwork>) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index,
            mac: None,
            ips,
            flags: 0,
        }
    }

    fn v4(addr: Ipv4Addr, prefix: u8) -> IpNetwork {
        IpNetwork::V4(Ipv4Network::new(addr, prefix).unwrap())
    }

    fn v6(addr: Ipv6Addr, prefix: u8) -> IpNetwork {
        IpNetwork::V6(Ipv6Network::new(addr, prefix).unwrap())
    }

    /// The first non-loopback IPv4 address wins, in interface order.
    #[test]
    fn test_first_ipv4_skips_loopback_and_v6() {
        let interfaces = vec![
            iface("lo", 1, vec![v4(Ipv4Addr::LOCALHOST, 8)]),
            iface("eth0", 2, vec![
                v6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1), 64),
                v4(Ipv4Addr::new(192, 168, 1, 42), 24),
                v4(Ipv4Addr::new(10, 0, 0, 5), 24),
            ]),
        ];

        let ip = first_ipv4(&interfaces).unwrap();
        assert_eq!(ip, "192.168.1.42");
    }

    /// A loopback-only host (offline machine) yields the resolution error.
    #[test]
    fn test_first_ipv4_loopback_only_fails() {
        let interfaces = vec![iface("lo", 1, vec![v4(Ipv4Addr::LOCALHOST, 8)])];

        let err = first_ipv4(&interfaces).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NetsightError>(),
            Some(NetsightError::AddressResolution(_))
        ));
    }

    /// IPv6-only interfaces cannot satisfy the resolver either.
    #[test]
    fn test_first_ipv4_v6_only_fails() {
        let interfaces = vec![iface(
            "eth0",
            2,
            vec![v6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1), 64)],
        )];

        assert!(first_ipv4(&interfaces).is_err());
    }

    /// Smoke test against the real interface table: must not panic, and any
    /// address it does return must be a dotted quad.
    #[test]
    fn test_local_ipv4_smoke() {
        if let Ok(ip) = local_ipv4() {
            assert_eq!(ip.split('.').count(), 4);
            assert_ne!(ip, "127.0.0.1");
        }
    }

    /// Valid dotted quads map to their `/24` network address.
    #[test]
    fn test_subnet_of_valid() {
        assert_eq!(subnet_of("192.168.1.42"), "192.168.1.0/24");
        assert_eq!(subnet_of("10.0.0.5"), "10.0.0.0/24");
        assert_eq!(subnet_of("172.16.254.1"), "172.16.254.0/24");
    }

    /// Anything without exactly four dot-separated parts degrades to "".
    #[test]
    fn test_subnet_of_malformed() {
        assert_eq!(subnet_of(""), "");
        assert_eq!(subnet_of("192.168.1"), "");
        assert_eq!(subnet_of("192.168.1.1.1"), "");
        assert_eq!(subnet_of("not an ip"), "");
    }

    /// The split is purely textual: four parts are enough, octet values are
    /// not validated here (malformed addresses simply probe as offline).
    #[test]
    fn test_subnet_of_is_textual() {
        assert_eq!(subnet_of("999.999.999.999"), "999.999.999.0/24");
    }
}
