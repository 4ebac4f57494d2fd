//! # Request Metrics
//!
//! Records one counter and one latency histogram per request through the
//! `metrics` facade. When no recorder is installed the macros are no-ops,
//! so the middleware can stay mounted unconditionally.
//!
//! Paths are labelled with the matched route template (`/countries/{code}/neighbors`)
//! rather than the raw URI, which keeps label cardinality bounded.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Total HTTP requests, labelled by method, path and status.
pub const REQUESTS_TOTAL: &str = "terra_http_requests_total";
/// Request latency in seconds, labelled by method and path.
pub const REQUEST_DURATION_SECONDS: &str = "terra_http_request_duration_seconds";

/// Label used for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Metrics middleware: times the request and records it after the handler runs.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = route_label(request.extensions().get::<MatchedPath>());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "method" => method, "path" => path)
        .record(duration);

    response
}

fn route_label(matched: Option<&MatchedPath>) -> String {
    matched
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string())
}
