//! Countries API client configuration.
//!
//! Defaults point to the public REST Countries v3.1 service. Override via
//! environment variables or explicit construction for testing.

use url::Url;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the countries data provider.
#[derive(Debug, Clone)]
pub struct CountriesApiConfig {
    /// Base URL including the API version path, e.g. `https://restcountries.com/v3.1`.
    pub base_url: Url,
    /// Request timeout in seconds, covering connect through body read.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header sent upstream.
    pub user_agent: String,
}

impl CountriesApiConfig {
    /// Build a configuration from a base URL string with default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("base_url", base_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `COUNTRIES_API_URL` (default: `https://restcountries.com/v3.1`)
    /// - `COUNTRIES_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("COUNTRIES_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match lookup("COUNTRIES_TIMEOUT_SECS") {
            Some(s) => parse_timeout(&s)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            base_url: parse_url("COUNTRIES_API_URL", &raw)?,
            timeout_secs,
            user_agent: default_user_agent(),
        })
    }

    /// Configuration pointing at a local mock server (for testing).
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            timeout_secs: 5,
            ..Self::new(uri)?
        })
    }

    /// Replace the timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn default_user_agent() -> String {
    format!("terra/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}
