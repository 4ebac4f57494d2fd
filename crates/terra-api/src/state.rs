//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The state is built once at startup and never mutated. It holds the
//! upstream client (base URL and timeout fixed at construction) and the
//! optional metrics handle. Country data is never stored here: every
//! request fetches fresh records.

use std::net::{IpAddr, SocketAddr};

use metrics_exporter_prometheus::PrometheusHandle;
use terra_client::{CountriesApiConfig, CountriesClient};

/// Process configuration assembled by the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub countries: CountriesApiConfig,
}

impl AppConfig {
    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream countries provider.
    pub countries: CountriesClient,
    /// Prometheus handle when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("countries", &self.countries)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl AppState {
    /// Create state around an upstream client, without metrics export.
    pub fn new(countries: CountriesClient) -> Self {
        Self {
            countries,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
