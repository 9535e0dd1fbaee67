// # Cloudflare DNS Provider
//
// This crate provides the Cloudflare API v4 implementation of
// `ddns_core::DnsProvider`.
//
// ## Implementation Status
//
// - ✅ One HTTP request per trait call
// - ✅ Global API key (`X-Auth-Key`) and API token (`Authorization: Bearer`)
// - ✅ HTTP timeout configured (30 seconds)
// - ✅ Envelopes decoded even on non-2xx, so Cloudflare's own error
//      messages reach the operator
// - ❌ NO retry logic (a failed call fails the run)
// - ❌ NO record creation (only existing records are patched)
// - ❌ NO zone auto-discovery (the zone ID is configured)
//
// ## Security Requirements
//
// - The auth key NEVER appears in logs
// - The provider holds no credentials; they are passed per call
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - List DNS Records: GET `/zones/:zone_id/dns_records?type=A&name=...`
// - Patch DNS Record: PATCH `/zones/:zone_id/dns_records/:record_id`

use async_trait::async_trait;
use ddns_core::auth::AUTH_EMAIL_HEADER;
use ddns_core::record::{ListResponse, RecordUpdate, UpdateResponse, join_messages};
use ddns_core::traits::DnsProvider;
use ddns_core::{Credentials, Error, Result};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Cloudflare API base URL
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare DNS provider
///
/// # Trust Level: Untrusted
///
/// This provider is isolated, stateless, and single-shot. Whether an update
/// is needed is decided by `ddns_core::Updater`.
#[derive(Debug)]
pub struct CloudflareProvider {
    /// API base URL without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl CloudflareProvider {
    /// Create a provider talking to the public Cloudflare API
    pub fn new() -> Result<Self> {
        Self::with_base_url(CLOUDFLARE_API_BASE)
    }

    /// Create a provider talking to `base_url` (mock servers, API gateways)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn records_url(&self, zone_id: &str) -> String {
        format!("{}/zones/{}/dns_records", self.base_url, zone_id)
    }

    /// Attach the email, content type and auth headers
    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        let (auth_name, auth_value) = credentials.auth_header();
        builder
            .header(AUTH_EMAIL_HEADER, &credentials.email)
            .header(CONTENT_TYPE, "application/json")
            .header(auth_name, auth_value)
    }
}

/// Read the body and decode it as a Cloudflare envelope
///
/// Cloudflare wraps API-level failures (bad token, validation errors) in the
/// usual envelope with a 4xx status, so the body is decoded first and the
/// status only matters when it is not an envelope at all.
async fn decode_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &'static str,
) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::network(format!("Failed to read {}: {}", what, e)))?;

    tracing::debug!("Cloudflare answered {} for {}", status, what);

    match serde_json::from_str(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(Error::http_status(status.as_u16(), body)),
        Err(e) => Err(Error::decode(what, e)),
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    /// List A records by name
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /zones/:zone_id/dns_records?type=A&name=home.example.com
    /// X-Auth-Email: <email>
    /// X-Auth-Key: <key>  |  Authorization: Bearer <token>
    /// ```
    async fn list_a_records(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_name: &str,
    ) -> Result<ListResponse> {
        let url = self.records_url(zone_id);
        tracing::debug!("Looking up A record {} in zone {}", record_name, zone_id);

        let response = self
            .authorized(self.client.get(&url), credentials)
            .query(&[("type", "A"), ("name", record_name)])
            .send()
            .await
            .map_err(|e| {
                Error::network(format!("Failed to fetch records from Cloudflare: {}", e))
            })?;

        let listing: ListResponse = decode_envelope(response, "record list response").await?;

        if !listing.success {
            return Err(Error::provider(
                "cloudflare",
                format!("Record lookup failed: {}", join_messages(&listing.errors)),
            ));
        }

        Ok(listing)
    }

    /// Patch an existing record
    ///
    /// # API Call
    ///
    /// ```http
    /// PATCH /zones/:zone_id/dns_records/:record_id
    /// {
    ///   "type": "A",
    ///   "name": "home.example.com",
    ///   "content": "203.0.113.7",
    ///   "ttl": 1,
    ///   "proxied": false
    /// }
    /// ```
    async fn patch_record(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<UpdateResponse> {
        let url = format!("{}/{}", self.records_url(zone_id), record_id);
        tracing::debug!("Patching record {} in zone {}", record_id, zone_id);

        let response = self
            .authorized(self.client.patch(&url), credentials)
            .json(update)
            .send()
            .await
            .map_err(|e| {
                Error::network(format!("Failed to update record in Cloudflare: {}", e))
            })?;

        decode_envelope(response, "update response").await
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}
