//! DNS record types and Cloudflare API v4 envelopes
//!
//! Records are owned by the provider. The updater only holds a transient,
//! read-only copy and never mutates it locally. Every field is optional on
//! the wire so that fields Cloudflare adds, drops or renames do not break
//! decoding.

use serde::{Deserialize, Deserializer, Serialize};

/// A DNS record as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub id: String,
    pub zone_id: String,
    pub zone_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value; the IP address for A records
    pub content: String,
    pub proxiable: bool,
    pub proxied: bool,
    pub ttl: u32,
    pub locked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: RecordMeta,
}

/// Provider-side bookkeeping attached to a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMeta {
    pub auto_added: bool,
    pub managed_by_apps: bool,
    pub managed_by_argo_tunnel: bool,
    pub source: String,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    /// Number of records in this page
    pub count: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

/// An entry of the `errors` or `messages` arrays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub code: i64,
    pub message: String,
}

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Join API messages into one line for error reporting
pub fn join_messages(messages: &[ApiMessage]) -> String {
    if messages.is_empty() {
        return "no error details returned".to_string();
    }

    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Envelope of the record listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub result: Vec<DnsRecord>,
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ApiMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<ApiMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub result_info: ResultInfo,
}

/// Envelope of the single-record update endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateResponse {
    /// Updated record; `null` when the update failed
    pub result: Option<DnsRecord>,
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<ApiMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<ApiMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub result_info: ResultInfo,
}

/// Cloudflare sends `null` instead of an empty value on failures
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// PATCH payload for an A record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl RecordUpdate {
    /// Payload that points A record `name` at `content`
    pub fn a_record(
        name: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
        proxied: bool,
    ) -> Self {
        Self {
            record_type: "A".to_string(),
            name: name.into(),
            content: content.into(),
            ttl,
            proxied,
        }
    }
}
