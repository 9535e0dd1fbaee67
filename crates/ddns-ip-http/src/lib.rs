// # HTTP IP Source
//
// This crate provides the HTTP IP-echo implementation of
// `ddns_core::IpSource`.
//
// ## Architecture
//
// Asks an external echo service (api.ipify.org by default) for the
// caller's public address. One GET per call, no polling, no caching.
// The service must answer `200 OK` with the bare address as plain text.

use ddns_core::traits::{IpSource, IpVersion};
use ddns_core::{Error, Result};

use std::net::IpAddr;
use std::time::Duration;

/// Default IP echo service (plain-text IPv4 answer)
pub const DEFAULT_IP_SERVICE: &str = "https://api.ipify.org?format=text";

/// HTTP timeout for the echo request
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-based IP source
#[derive(Debug)]
pub struct HttpIpSource {
    /// URL to fetch IP from
    url: String,

    /// Required IP version (None = accept both)
    version: Option<IpVersion>,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a source for the default service, accepting IPv4 only
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_IP_SERVICE, Some(IpVersion::V4))
    }

    /// Create a source for a custom echo service
    ///
    /// # Parameters
    ///
    /// - `url`: URL answering with a plain-text IP address
    /// - `version`: IP version to require (None = both)
    pub fn with_url(url: impl Into<String>, version: Option<IpVersion>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            version,
            client,
        })
    }

    /// Parse and version-check the echo service's answer
    fn parse_answer(&self, body: &str) -> Result<IpAddr> {
        let ip_text = body.trim();

        let ip: IpAddr = ip_text
            .parse()
            .map_err(|_| Error::invalid_ip(format!("echo service answered {:?}", ip_text)))?;

        if let Some(version) = self.version
            && !version.matches(&ip)
        {
            return Err(Error::invalid_ip(format!(
                "expected {:?} address, got {}",
                version, ip
            )));
        }

        Ok(ip)
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<IpAddr> {
        tracing::debug!("Fetching public IP from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to fetch IP address: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read IP response: {}", e)))?;

        self.parse_answer(&body)
    }

    fn version(&self) -> Option<IpVersion> {
        self.version
    }

    fn source_name(&self) -> &'static str {
        "ipify"
    }
}
