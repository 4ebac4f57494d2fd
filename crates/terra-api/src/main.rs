//! # terra-api — Binary Entry Point
//!
//! Parses CLI flags (with environment fallbacks; upstream settings come from
//! `CountriesApiConfig::from_env` and flags override them), initializes tracing and the
//! Prometheus recorder, and serves the Axum app until Ctrl-C or SIGTERM.

use std::net::IpAddr;

use anyhow::Context;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use terra_api::{AppConfig, AppState};
use terra_client::{CountriesApiConfig, CountriesClient};
use tracing_subscriber::EnvFilter;

/// Country neighbors, land routes, regional statistics and search over HTTP.
#[derive(Debug, Parser)]
#[command(name = "terra-api", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Address to bind.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Base URL of the upstream countries API. Overrides `COUNTRIES_API_URL`.
    #[arg(long)]
    countries_url: Option<String>,

    /// Upstream request timeout in seconds. Overrides `COUNTRIES_TIMEOUT_SECS`.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit logs as JSON lines.
    #[arg(long, env = "TERRA_LOG_JSON")]
    log_json: bool,

    /// Do not install the Prometheus recorder; `/metrics` answers 404.
    #[arg(long)]
    no_metrics: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the environment-derived upstream config.
    fn app_config(&self, base: CountriesApiConfig) -> anyhow::Result<AppConfig> {
        let mut countries = match &self.countries_url {
            Some(url) => CountriesApiConfig {
                base_url: CountriesApiConfig::new(url)
                    .context("invalid --countries-url")?
                    .base_url,
                ..base
            },
            None => base,
        };
        if let Some(secs) = self.timeout_secs {
            anyhow::ensure!(secs > 0, "--timeout-secs must be positive");
            countries = countries.with_timeout_secs(secs);
        }
        Ok(AppConfig {
            bind: self.bind,
            port: self.port,
            countries,
        })
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let env_config =
        CountriesApiConfig::from_env().context("invalid countries API environment")?;
    let config = cli.app_config(env_config)?;
    let client = CountriesClient::new(config.countries.clone())
        .context("failed to build countries API client")?;
    tracing::info!(
        upstream = %client.base_url(),
        timeout_secs = config.countries.timeout_secs,
        "countries API client configured"
    );

    let mut state = AppState::new(client);
    if !cli.no_metrics {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("failed to install Prometheus recorder")?;
        state = state.with_metrics(handle);
    }

    let app = terra_api::app(state);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("terra API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("terra API shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
