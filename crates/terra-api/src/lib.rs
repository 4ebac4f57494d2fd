//! # terra-api — Axum API Service
//!
//! HTTP front end over an upstream countries provider. Every request fetches
//! fresh data through `terra-client`; all computation lives in `terra-core`.
//!
//! ## API Surface
//!
//! | Route                            | Module                   |
//! |----------------------------------|--------------------------|
//! | `GET /countries/{code}/neighbors` | [`routes::countries`]   |
//! | `POST /countries/search`          | [`routes::countries`]   |
//! | `GET /route?from=&to=`            | [`routes::land_route`]  |
//! | `GET /regions/{region}/stats`     | [`routes::regions`]     |
//! | `GET /openapi.json`               | [`openapi`]             |
//! | `GET /metrics`                    | Prometheus scrape       |
//! | `GET /health/*`                   | liveness / readiness    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` sit outside the request middleware so that
/// scrapes and probes do not show up in request metrics.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::countries::router())
        .merge(routes::land_route::router())
        .merge(routes::regions::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .with_state(state.clone());

    let probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(prometheus_metrics))
        .with_state(state);

    Router::new().merge(probes).merge(api)
}

/// GET /health/liveness — process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — ready to serve. The service holds no
/// connections or caches, so readiness equals liveness.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics — Prometheus text exposition, or 404 when no recorder is installed.
async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}
