// # ddns-core
//
// Core library for the one-shot Cloudflare DDNS updater.
//
// ## Architecture Overview
//
// This library provides everything one update cycle needs:
// - **IpSource**: Trait for discovering the current public IP
// - **DnsProvider**: Trait for looking up and patching DNS records
// - **Updater**: Runs the IP lookup → record lookup → compare → patch flow once
// - **UpdaterConfig**: `app.env` file overlaid with environment variables
// - **AuthScheme**: Global API key or bearer token
//
// ## Design Principles
//
// 1. **Explicit configuration**: The config value is passed in, never global
// 2. **Errors as values**: Nothing here exits the process; the binary maps errors to exit codes
// 3. **Update only**: Records are never created, only an existing A record is patched
// 4. **Idempotency**: No request is sent when the record already matches

pub mod auth;
pub mod config;
pub mod error;
pub mod record;
pub mod traits;
pub mod updater;

// Re-export core types for convenience
pub use auth::{AuthScheme, Credentials};
pub use config::UpdaterConfig;
pub use error::{Error, Result};
pub use record::{
    ApiMessage, DnsRecord, ListResponse, RecordMeta, RecordUpdate, ResultInfo, UpdateResponse,
};
pub use traits::{DnsProvider, IpSource, IpVersion};
pub use updater::{UpdateResult, Updater};
