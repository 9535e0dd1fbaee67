//! Provider authentication schemes
//!
//! Cloudflare accepts either a global API key (`X-Auth-Key: <key>`) or a
//! scoped API token (`Authorization: Bearer <token>`). The choice comes from
//! `AUTH_METHOD` and is parsed into [`AuthScheme`] before any provider call.

use crate::config::UpdaterConfig;
use crate::error::{Error, Result};
use std::str::FromStr;

/// Header carrying the account email
pub const AUTH_EMAIL_HEADER: &str = "X-Auth-Email";

/// Supported authentication schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Global API key (`AUTH_METHOD=global`)
    GlobalKey,
    /// Scoped API token (`AUTH_METHOD=token`)
    BearerToken,
}

impl AuthScheme {
    /// Header that carries the credential
    pub fn header_name(self) -> &'static str {
        match self {
            AuthScheme::GlobalKey => "X-Auth-Key",
            AuthScheme::BearerToken => "Authorization",
        }
    }

    /// Prefix prepended to the key in the header value
    pub fn value_prefix(self) -> &'static str {
        match self {
            AuthScheme::GlobalKey => "",
            AuthScheme::BearerToken => "Bearer ",
        }
    }

    /// Full header value for `key`
    pub fn header_value(self, key: &str) -> String {
        format!("{}{}", self.value_prefix(), key)
    }

    /// Name as written in the configuration
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::GlobalKey => "global",
            AuthScheme::BearerToken => "token",
        }
    }
}

impl FromStr for AuthScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "global" => Ok(AuthScheme::GlobalKey),
            "token" => Ok(AuthScheme::BearerToken),
            other => Err(Error::UnsupportedAuthMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a provider needs to authenticate one request
#[derive(Clone)]
pub struct Credentials {
    pub scheme: AuthScheme,
    pub email: String,
    key: String,
}

// Custom Debug implementation that hides the key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("scheme", &self.scheme)
            .field("email", &self.email)
            .field("key", &"<REDACTED>")
            .finish()
    }
}

impl Credentials {
    pub fn new(scheme: AuthScheme, email: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            scheme,
            email: email.into(),
            key: key.into(),
        }
    }

    /// Build credentials from the configured auth method, email and key
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAuthMethod`] if `auth_method` is not `global` or `token`.
    pub fn from_config(config: &UpdaterConfig) -> Result<Self> {
        let scheme = config.auth_method.parse()?;
        Ok(Self::new(scheme, &config.auth_email, &config.auth_key))
    }

    /// `(name, value)` of the auth header
    pub fn auth_header(&self) -> (&'static str, String) {
        (self.scheme.header_name(), self.scheme.header_value(&self.key))
    }
}
