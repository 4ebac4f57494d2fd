//! # terra-client -- Typed Rust client for the countries data provider
//!
//! Fetches country records from a REST Countries v3.1 compatible service
//! and converts them into [`terra_core::CountryRecord`]s.
//!
//! ## Operations
//!
//! | Method | Upstream path | Operation |
//! |--------|---------------|-----------|
//! | GET | `/alpha/{code}` | [`CountriesClient::fetch_by_code`] |
//! | GET | `/alpha?codes={a,b}` | [`CountriesClient::fetch_by_codes`] |
//! | GET | `/region/{region}` | [`CountriesClient::fetch_by_region`] |
//! | GET | `/all?fields={a,b}` | [`CountriesClient::fetch_all`] |
//!
//! ## Request Policy
//!
//! One outbound request per operation. No retries, no caching: every call
//! reflects the provider's current data. A non-2xx status surfaces as
//! [`CountriesApiError::ApiError`] carrying the upstream status, except
//! where an operation documents a not-found mapping.

pub mod config;
pub mod countries;
pub mod error;

pub use config::CountriesApiConfig;
pub use countries::RestCountry;
pub use error::CountriesApiError;

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

/// Client for the upstream countries API.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CountriesClient {
    /// Create a new client from configuration.
    pub fn new(config: CountriesApiConfig) -> Result<Self, CountriesApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| CountriesApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join `path` (which may carry a query string) onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue a GET, mapping transport failures to [`CountriesApiError::Http`].
    async fn get(&self, endpoint: &str, url: &str) -> Result<reqwest::Response, CountriesApiError> {
        tracing::debug!(endpoint, url, "calling countries API");
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| CountriesApiError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            })
    }
}

/// Decode a JSON body, mapping non-2xx statuses to [`CountriesApiError::ApiError`].
async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, CountriesApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status, "countries API returned non-success status");
        return Err(CountriesApiError::ApiError {
            endpoint: endpoint.to_string(),
            status,
            body,
        });
    }

    resp.json().await.map_err(|e| CountriesApiError::Deserialization {
        endpoint: endpoint.to_string(),
        source: e,
    })
}
