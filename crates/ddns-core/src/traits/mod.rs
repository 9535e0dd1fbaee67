//! Core traits for the DDNS updater
//!
//! This module defines the two seams the [`Updater`](crate::Updater) depends on.
//!
//! - [`IpSource`]: Discover the current public IP address
//! - [`DnsProvider`]: Look up and update DNS records via a provider API

pub mod ip_source;
pub mod dns_provider;

pub use ip_source::{IpSource, IpVersion};
pub use dns_provider::DnsProvider;
