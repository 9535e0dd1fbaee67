// # ddnsd - one-shot DDNS updater
//
// This binary is a THIN integration layer:
// 1. Set up logging
// 2. Read `app.env` (overlaid with environment variables)
// 3. Wire the ipify IP source and the Cloudflare provider into an Updater
// 4. Run one update cycle and map the outcome to an exit code
//
// All update logic lives in ddns-core. Run it from cron or a systemd timer
// to keep the record current.
//
// ## Configuration
//
// `app.env` in the working directory (or in `DDNS_CONFIG_DIR`):
//
// - `AUTH_EMAIL`: Cloudflare account email
// - `AUTH_METHOD`: `global` (API key) or `token` (API token)
// - `AUTH_KEY`: API key or token
// - `ZONE_IDENTIFIER`: Zone ID
// - `RECORD_NAME`: A record to keep updated
// - `TTL`: TTL for the record (1 = automatic)
// - `PROXY`: Proxy through Cloudflare (default false)
// - `SITENAME`: Display name used in messages
// - `VERBOSE`: Dump API responses (default false)
//
// Every key can be overridden by an environment variable of the same name.
//
// ### Process
// - `DDNS_CONFIG_DIR`: Directory holding `app.env` (default: current directory)
// - `DDNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export AUTH_METHOD=token
// export AUTH_KEY=your_token
// DDNS_CONFIG_DIR=/etc/ddns ddnsd
// ```

use anyhow::{Context, Result};
use ddns_core::{UpdateResult, Updater, UpdaterConfig};
use ddns_ip_http::HttpIpSource;
use ddns_provider_cloudflare::CloudflareProvider;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes
///
/// - 0: Record updated, or already current
/// - 1: Any failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DdnsExitCode {
    /// Updated or unchanged
    Success = 0,
    /// Configuration, network, provider or validation failure
    Failure = 1,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl<T> From<&Result<T>> for DdnsExitCode {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => DdnsExitCode::Success,
            Err(_) => DdnsExitCode::Failure,
        }
    }
}

/// Parse `DDNS_LOG_LEVEL`
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "DDNS_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

fn main() -> ExitCode {
    let log_level = match parse_log_level(
        &env::var("DDNS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    ) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return DdnsExitCode::Failure.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::Failure.into();
    }

    // Sequential by nature; one thread is enough
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::Failure.into();
        }
    };

    let result = rt.block_on(run());

    match &result {
        Ok(UpdateResult::Unchanged { .. }) => info!("Nothing to update"),
        Ok(UpdateResult::Updated { record_id, .. }) => info!("Record {} updated", record_id),
        Err(e) => error!("{:#}", e),
    }

    DdnsExitCode::from(&result).into()
}

/// Load configuration, wire components and run one update cycle
async fn run() -> Result<UpdateResult> {
    let config_dir = env::var("DDNS_CONFIG_DIR").unwrap_or_else(|_| ".".to_string());
    let config = UpdaterConfig::load(&config_dir).context("cannot load config")?;

    info!(
        "Configuration loaded for {} ({})",
        config.sitename, config.record_name
    );

    let ip_source = HttpIpSource::new().context("cannot create IP source")?;
    let provider = CloudflareProvider::new().context("cannot create Cloudflare provider")?;

    let updater = Updater::new(Box::new(ip_source), Box::new(provider), config);
    let outcome = updater.run().await?;

    Ok(outcome)
}
