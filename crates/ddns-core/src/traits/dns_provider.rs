// # DNS Provider Trait
//
// Defines the interface for looking up and updating DNS records via
// provider APIs.
//
// ## Implementations
//
// - Cloudflare: `ddns-provider-cloudflare` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::{AuthScheme, Credentials, DnsProvider, RecordUpdate};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//     let creds = Credentials::new(AuthScheme::BearerToken, "ops@example.com", "token");
//
//     let listing = provider.list_a_records(&creds, "zone", "home.example.com").await?;
//     let record = &listing.result[0];
//
//     let update = RecordUpdate::a_record("home.example.com", "203.0.113.7", 1, false);
//     provider.patch_record(&creds, "zone", &record.id, &update).await?;
//
//     Ok(())
// }
// ```

use crate::auth::Credentials;
use crate::record::{ListResponse, RecordUpdate, UpdateResponse};
use async_trait::async_trait;

/// Trait for DNS provider implementations
///
/// Implementations translate each call into exactly one API request and
/// hand back the decoded envelope. Deciding whether an update is needed is
/// the job of the [`Updater`](crate::Updater).
///
/// # Trust Level: Untrusted
///
/// ## Allowed Capabilities
/// - ✅ Perform HTTP/HTTPS API calls to their endpoints only
/// - ✅ Parse provider-specific responses
/// - ✅ Return success or failure
///
/// ## Forbidden Capabilities
/// - ❌ Spawn tasks or threads
/// - ❌ Implement retry logic or backoff
/// - ❌ Decide whether an update is needed
/// - ❌ Create records (only existing records are updated)
/// - ❌ Log credentials
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List A records named `record_name` in zone `zone_id`
    ///
    /// # Returns
    ///
    /// - `Ok(ListResponse)`: The decoded envelope (possibly with zero records)
    /// - `Err(Error)`: Transport, status, decode or provider-reported failure
    async fn list_a_records(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_name: &str,
    ) -> Result<ListResponse, crate::Error>;

    /// Update record `record_id` in zone `zone_id`
    ///
    /// A provider-reported failure is returned as `Ok` with
    /// `success == false` so the caller can report which record failed.
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResponse)`: The decoded envelope
    /// - `Err(Error)`: Transport, status or decode failure
    async fn patch_record(
        &self,
        credentials: &Credentials,
        zone_id: &str,
        record_id: &str,
        update: &RecordUpdate,
    ) -> Result<UpdateResponse, crate::Error>;

    /// Get the provider name (for logging/debugging)
    ///
    /// # Returns
    ///
    /// A static string identifying the provider (e.g., "cloudflare")
    fn provider_name(&self) -> &'static str;
}
