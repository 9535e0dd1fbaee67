// # IP Source Trait
//
// Defines the interface for discovering the current public IP address.
//
// ## Implementations
//
// - HTTP IP echo (api.ipify.org): `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//
//     let current_ip = source.current().await?;
//     println!("Public IP: {}", current_ip);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::net::IpAddr;

/// IP version (v4 or v6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Whether `ip` belongs to this version
    pub fn matches(self, ip: &IpAddr) -> bool {
        match self {
            IpVersion::V4 => ip.is_ipv4(),
            IpVersion::V6 => ip.is_ipv6(),
        }
    }
}

/// Trait for IP source implementations
///
/// A source answers one question: what is our public address right now.
/// It is called once per update cycle.
///
/// # Trust Level: Semi-Trusted
///
/// ## Allowed Capabilities
/// - ✅ Perform a single lookup against its endpoint per call
/// - ✅ Validate and parse the answer
///
/// ## Forbidden Capabilities
/// - ❌ Retry or poll (a failed lookup fails the run)
/// - ❌ Cache addresses between calls
/// - ❌ Talk to the DNS provider
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(IpAddr)`: The current IP address
    /// - `Err(Error)`: Transport failure, unexpected status or unusable answer
    async fn current(&self) -> Result<IpAddr, crate::Error>;

    /// Get the IP version this source reports
    ///
    /// Returns `None` if the implementation may answer with either version.
    /// The updater refuses a source that declares IPv6 before asking it.
    fn version(&self) -> Option<IpVersion> {
        None
    }

    /// Get the source name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}
