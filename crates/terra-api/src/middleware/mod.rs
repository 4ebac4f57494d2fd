//! # Middleware Modules
//!
//! Tower middleware layers for the API service:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`metrics`]: Prometheus-compatible request metrics.

pub mod metrics;
pub mod tracing_layer;
