//! Error types for the DDNS updater
//!
//! Every error is terminal for the current update cycle. Nothing in this
//! crate recovers or retries; errors bubble up to the binary, which logs a
//! single line and maps the failure to a non-zero exit code.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or is incomplete
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with an unexpected HTTP status
    #[error("HTTP error: status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body (may be empty)
        body: String,
    },

    /// Response body was not the JSON we expected
    #[error("Failed to decode {what}: {source}")]
    Decode {
        /// What was being decoded
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// `AUTH_METHOD` is neither `global` nor `token`
    #[error("Unsupported auth method: {0:?} (expected \"global\" or \"token\")")]
    UnsupportedAuthMethod(String),

    /// The A record to update does not exist at the provider
    #[error("No A record named {record_name} exists for {sitename}. Try adding one first.")]
    RecordNotFound {
        /// Record name that was looked up
        record_name: String,
        /// Display name of the site
        sitename: String,
    },

    /// The IP echo service returned something that is not a usable address
    #[error("Invalid IP address: {0}")]
    InvalidIp(String),

    /// Provider reported a failure inside its response envelope
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// Provider refused the record update
    #[error("Failed to update record {record_id} ({record_name}): {errors}")]
    UpdateRejected {
        /// Provider-side record identifier
        record_id: String,
        /// Record name
        record_name: String,
        /// Provider error messages, joined
        errors: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { what, source }
    }

    /// Create an invalid IP error
    pub fn invalid_ip(msg: impl Into<String>) -> Self {
        Self::InvalidIp(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_tells_operator_to_create_it() {
        let err = Error::RecordNotFound {
            record_name: "home.example.com".to_string(),
            sitename: "Home".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("home.example.com"));
        assert!(msg.contains("Home"));
        assert!(msg.contains("Try adding one first"));
    }

    #[test]
    fn test_update_rejected_names_record() {
        let err = Error::UpdateRejected {
            record_id: "abc".to_string(),
            record_name: "home.example.com".to_string(),
            errors: "1004: DNS Validation Error".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to update record abc (home.example.com): 1004: DNS Validation Error"
        );
    }

    #[test]
    fn test_decode_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::decode("list response", source);

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to decode list response"));
    }
}
