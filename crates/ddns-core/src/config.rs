//! Configuration for the DDNS updater
//!
//! Configuration is read once at startup from an `app.env` file (dotenv
//! syntax) and overlaid with process environment variables of the same
//! name. The resulting [`UpdaterConfig`] is immutable and handed to the
//! [`Updater`](crate::Updater) explicitly.
//!
//! ```text
//! AUTH_EMAIL=ops@example.com
//! AUTH_METHOD=token
//! AUTH_KEY=...
//! ZONE_IDENTIFIER=023e105f4ecef8ad9ca31a8372d0c353
//! RECORD_NAME=home.example.com
//! TTL=1
//! PROXY=false
//! SITENAME=home
//! VERBOSE=false
//! ```
//!
//! Every value is kept as the raw string it was written as. Only `TTL`,
//! `PROXY` and `VERBOSE` are converted, so identifiers such as `00123`
//! reach the API unchanged.

use crate::error::{Error, Result};
use figment::Figment;
use figment::providers::Serialized;
use figment::value::{Dict, Value};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::env;
use std::path::Path;

/// Name of the configuration file looked up in the config directory
pub const CONFIG_FILE_NAME: &str = "app.env";

/// Keys read from the file and the environment (lowercased)
const CONFIG_KEYS: &[&str] = &[
    "auth_email",
    "auth_method",
    "auth_key",
    "zone_identifier",
    "record_name",
    "ttl",
    "proxy",
    "sitename",
    "verbose",
];

/// Updater configuration
///
/// All string fields and `ttl` are required. Empty values are not rejected
/// here; the provider API refuses them instead.
#[derive(Clone, Deserialize)]
pub struct UpdaterConfig {
    /// Cloudflare account email, sent as `X-Auth-Email`
    pub auth_email: String,

    /// `global` (API key) or `token` (API token)
    pub auth_method: String,

    /// Global API key or API token
    /// ⚠️ NEVER log this value
    pub auth_key: String,

    /// Zone ID that holds the record
    pub zone_identifier: String,

    /// Fully qualified record name (e.g. "home.example.com")
    pub record_name: String,

    /// TTL sent with the update (1 = automatic)
    #[serde(deserialize_with = "u32_from_str")]
    pub ttl: u32,

    /// Whether the record is proxied through Cloudflare
    #[serde(default, deserialize_with = "bool_from_str")]
    pub proxy: bool,

    /// Display name used in operator-facing messages
    pub sitename: String,

    /// Dump decoded API responses
    #[serde(default, deserialize_with = "bool_from_str")]
    pub verbose: bool,
}

// Custom Debug implementation that hides the auth key
impl std::fmt::Debug for UpdaterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdaterConfig")
            .field("auth_email", &self.auth_email)
            .field("auth_method", &self.auth_method)
            .field("auth_key", &"<REDACTED>")
            .field("zone_identifier", &self.zone_identifier)
            .field("record_name", &self.record_name)
            .field("ttl", &self.ttl)
            .field("proxy", &self.proxy)
            .field("sitename", &self.sitename)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl UpdaterConfig {
    /// Load `app.env` from `dir`, overlaid with environment variables
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing or unparsable, if
    /// a required key is absent from both the file and the environment, or
    /// if `TTL`, `PROXY` or `VERBOSE` holds an unusable value.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        let file = read_env_file(&path)?;

        Figment::new()
            .merge(Serialized::defaults(file))
            .merge(Serialized::defaults(read_environment()))
            .extract()
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }
}

/// Read a dotenv file into a figment dictionary with lowercased keys
fn read_env_file(path: &Path) -> Result<Dict> {
    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;

    let mut dict = Dict::new();
    for entry in entries {
        let (key, raw) = entry
            .map_err(|e| Error::config(format!("cannot parse {}: {}", path.display(), e)))?;

        dict.insert(key.to_lowercase(), Value::from(raw));
    }

    Ok(dict)
}

/// Collect the configuration keys that are set in the process environment
fn read_environment() -> Dict {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            env::var(key.to_uppercase())
                .ok()
                .map(|raw| (key.to_string(), Value::from(raw)))
        })
        .collect()
}

fn u32_from_str<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|e| D::Error::custom(format!("invalid number {:?}: {}", raw, e)))
}

/// Accepts `true`/`false`, `t`/`f` and `1`/`0` in any case; empty means false
fn bool_from_str<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" | "" => Ok(false),
        _ => Err(D::Error::custom(format!("invalid boolean {:?}", raw))),
    }
}
