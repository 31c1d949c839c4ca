//! Client configuration.
//!
//! The only required option is the base endpoint. `timeout_secs` is read by
//! `UreqTransport::from_config` and ignored by other transports. Every way of
//! building a `ClientConfig` (constructor, env, serde) goes through
//! `parse_endpoint`, so a config in hand always holds a usable base URL.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Environment variable read by `ClientConfig::from_env`.
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid base endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ConfigError {
    fn invalid(endpoint: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse and normalize a base endpoint.
///
/// Accepts absolute `http`/`https` URLs with a host and no query or fragment.
/// Trailing slashes are removed from the path so segments can be appended
/// with exactly one separator.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(endpoint.trim()).map_err(|e| ConfigError::invalid(endpoint, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(endpoint, "expected an http:// or https:// URL"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::invalid(endpoint, "missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::invalid(endpoint, "query and fragment are not allowed"));
    }
    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);
    Ok(url)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
    base_endpoint: Url,
    timeout_secs: Option<u64>,
}

#[derive(Deserialize)]
struct RawClientConfig {
    base_endpoint: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ConfigError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            base_endpoint: parse_endpoint(&raw.base_endpoint)?,
            timeout_secs: raw.timeout_secs,
        })
    }
}

impl ClientConfig {
    pub fn new(base_endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_endpoint: parse_endpoint(base_endpoint)?,
            timeout_secs: None,
        })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base = std::env::var(BASE_URL_ENV).map_err(|_| ConfigError::Missing(BASE_URL_ENV))?;
        Self::new(&base)
    }

    pub fn base_endpoint(&self) -> &Url {
        &self.base_endpoint
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }
}
