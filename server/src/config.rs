//! Host configuration parsed from environment variables.
//!
//! Every variable is optional. Blank values count as unset so a `.env` file
//! can list keys without values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("invalid API_UPSTREAM_URL {0:?}: expected an http:// or https:// URL")]
    InvalidUpstream(String),

    #[error("invalid PROXY_TIMEOUT_SECS: {0:?}")]
    InvalidTimeout(String),

    #[error("CONTENT_SECURITY_POLICY is not a valid header value")]
    InvalidPolicy,

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the external API, without a trailing slash.
    pub api_upstream_url: String,
    pub proxy_timeout: Duration,
    pub content_security_policy: Option<String>,
    /// Absolute site origin for robots.txt and sitemap.xml. Derived from the
    /// request `Host` when unset.
    pub public_site_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_upstream_url: DEFAULT_API_UPSTREAM_URL.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
            content_security_policy: None,
            public_site_url: None,
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `CONTENT_SECURITY_POLICY`: sent on every response when set
    /// - `PUBLIC_SITE_URL`: absolute origin for crawler files
    ///
    /// # Errors
    ///
    /// Returns the first variable that fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns the first variable that fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let api_upstream_url = parse_upstream(var("API_UPSTREAM_URL"))?;
        let proxy_timeout = match var("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        };
        let content_security_policy = var("CONTENT_SECURITY_POLICY");
        if let Some(policy) = &content_security_policy {
            axum::http::HeaderValue::from_str(policy).map_err(|_| ConfigError::InvalidPolicy)?;
        }
        let public_site_url = var("PUBLIC_SITE_URL").map(|url| url.trim_end_matches('/').to_owned());

        Ok(Self {
            port,
            api_upstream_url,
            proxy_timeout,
            content_security_policy,
            public_site_url,
        })
    }
}

fn parse_upstream(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_UPSTREAM_URL.to_owned());
    };
    let url = raw.trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if has_host {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidUpstream(raw))
    }
}
