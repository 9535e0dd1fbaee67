//! One-shot DDNS update cycle
//!
//! The [`Updater`] runs the whole flow once:
//!
//! ```text
//! IpSource::current() ──► AuthScheme ──► DnsProvider::list_a_records()
//!                                               │
//!                                     count < 1 ─┼─► RecordNotFound
//!                                               │
//!                               content == ip ──┼─► Unchanged
//!                                               ▼
//!                                   DnsProvider::patch_record()
//!                                               │
//!                              success == false ┼─► UpdateRejected
//!                                               ▼
//!                                            Updated
//! ```
//!
//! The first error ends the cycle. There are no retries and nothing is
//! persisted; run it again (cron, systemd timer) to keep the record fresh.

use crate::auth::Credentials;
use crate::config::UpdaterConfig;
use crate::error::{Error, Result};
use crate::record::{RecordUpdate, join_messages};
use crate::traits::{DnsProvider, IpSource, IpVersion};
use serde::Serialize;
use std::net::IpAddr;
use tracing::{debug, info, warn};

/// Outcome of a successful update cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// Record already pointed at the current IP (no-op)
    Unchanged {
        /// Provider-side record identifier
        record_id: String,
        /// The current IP address
        current_ip: IpAddr,
    },
    /// Record was patched
    Updated {
        /// Provider-side record identifier
        record_id: String,
        /// Record content before the update
        previous_content: String,
        /// Record content reported by the provider after the update
        new_content: String,
    },
}

/// Runs one update cycle against an IP source and a DNS provider
pub struct Updater {
    /// Where the current public IP comes from
    ip_source: Box<dyn IpSource>,

    /// DNS provider holding the record
    provider: Box<dyn DnsProvider>,

    config: UpdaterConfig,
}

impl Updater {
    /// Create a new updater
    pub fn new(
        ip_source: Box<dyn IpSource>,
        provider: Box<dyn DnsProvider>,
        config: UpdaterConfig,
    ) -> Self {
        Self {
            ip_source,
            provider,
            config,
        }
    }

    /// Run one update cycle
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult::Unchanged)`: The record already matches, nothing was sent
    /// - `Ok(UpdateResult::Updated)`: The record was patched
    /// - `Err(Error)`: The first failure encountered
    pub async fn run(&self) -> Result<UpdateResult> {
        let config = &self.config;

        info!(
            "Attempting to get our current IP address from {}",
            self.ip_source.source_name()
        );
        if let Some(version) = self.ip_source.version()
            && version != IpVersion::V4
        {
            return Err(Error::invalid_ip(format!(
                "{} answers with {:?} addresses, A records need IPv4",
                self.ip_source.source_name(),
                version
            )));
        }

        let current_ip = self.ip_source.current().await?;
        if !IpVersion::V4.matches(&current_ip) {
            return Err(Error::invalid_ip(format!(
                "A records need an IPv4 address, got {}",
                current_ip
            )));
        }
        info!("Our current public IP address: {}", current_ip);

        let credentials = Credentials::from_config(config)?;
        if config.verbose {
            info!("Auth method: {}", credentials.scheme);
        }

        info!(
            "Checking for A record {} via {}",
            config.record_name,
            self.provider.provider_name()
        );
        let listing = self
            .provider
            .list_a_records(&credentials, &config.zone_identifier, &config.record_name)
            .await?;

        info!("Count of records: {}", listing.result_info.count);
        let record = match listing.result.first() {
            Some(record) if listing.result_info.count >= 1 => record,
            _ => {
                return Err(Error::RecordNotFound {
                    record_name: config.record_name.clone(),
                    sitename: config.sitename.clone(),
                });
            }
        };

        if config.verbose {
            dump("Lookup response", &listing);
        }

        debug!("Found record {} with content {}", record.id, record.content);

        if record.content.parse::<IpAddr>().ok() == Some(current_ip) {
            info!(
                "Public IP {} hasn't changed since last update of {}; nothing to do",
                current_ip, config.record_name
            );
            return Ok(UpdateResult::Unchanged {
                record_id: record.id.clone(),
                current_ip,
            });
        }

        let update = RecordUpdate::a_record(
            &config.record_name,
            current_ip.to_string(),
            config.ttl,
            config.proxy,
        );

        info!(
            "Updating record {} ({}): {} -> {}",
            record.id, config.record_name, record.content, update.content
        );
        let response = self
            .provider
            .patch_record(&credentials, &config.zone_identifier, &record.id, &update)
            .await?;

        if config.verbose {
            dump("Update response", &response);
        }

        if !response.success {
            return Err(Error::UpdateRejected {
                record_id: record.id.clone(),
                record_name: config.record_name.clone(),
                errors: join_messages(&response.errors),
            });
        }

        let new_content = response
            .result
            .map(|updated| updated.content)
            .unwrap_or(update.content);

        info!(
            "Successfully updated record {} ({}): {}",
            record.id, config.record_name, new_content
        );

        Ok(UpdateResult::Updated {
            record_id: record.id.clone(),
            previous_content: record.content.clone(),
            new_content,
        })
    }
}

/// Pretty-print a decoded envelope for `VERBOSE=true`
fn dump<T: Serialize>(label: &str, envelope: &T) {
    match serde_json::to_string_pretty(envelope) {
        Ok(pretty) => info!("{}:\n{}", label, pretty),
        Err(e) => warn!("Failed to pretty print {}: {}", label, e),
    }
}
