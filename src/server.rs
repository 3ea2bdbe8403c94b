//! HTTP server bootstrap for the evidence mock service.
//!
//! This module wires together:
//! - configuration
//! - the template catalog and evidence generator
//! - the Axum router

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::handlers::{health_check, readiness_check, route_not_found};
use crate::domain::TemplateCatalog;
use crate::infra::{ConfigError, EvidenceGenerator, GenerationMode};
use crate::telemetry::{init_telemetry, TelemetryConfig};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server listen address.
    pub listen_addr: SocketAddr,
    /// How many records each request produces.
    pub mode: GenerationMode,
    /// Fixed generator seed; OS entropy when unset.
    pub seed: Option<u64>,
    /// `*` or a comma-separated origin list; no CORS layer when unset.
    pub cors_allow_origins: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            mode: GenerationMode::default(),
            seed: None,
            cors_allow_origins: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(p) => p.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    name: "PORT",
                    value: p.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => 8080,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let listen_addr: SocketAddr =
            format!("{host}:{port}")
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                    name: "HOST",
                    value: host.clone(),
                    reason: e.to_string(),
                })?;

        let mode = match lookup("EVIDENCE_MODE") {
            Some(m) => m.parse()?,
            None => GenerationMode::default(),
        };

        let seed = lookup("EVIDENCE_SEED")
            .map(|s| {
                s.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    name: "EVIDENCE_SEED",
                    value: s.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            mode,
            seed,
            cors_allow_origins,
        })
    }
}

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<TemplateCatalog>,
    pub generator: Arc<EvidenceGenerator>,
    pub mode: GenerationMode,
}

impl AppState {
    pub fn new(catalog: TemplateCatalog, generator: EvidenceGenerator, mode: GenerationMode) -> Self {
        Self {
            catalog: Arc::new(catalog),
            generator: Arc::new(generator),
            mode,
        }
    }

    /// State with the default catalog and a generator seeded per `config`.
    pub fn from_config(config: &Config) -> Self {
        let generator = match config.seed {
            Some(seed) => EvidenceGenerator::seeded(seed),
            None => EvidenceGenerator::from_entropy(),
        };
        Self::new(TemplateCatalog::default(), generator, config.mode)
    }
}

/// Start the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    init_telemetry(&TelemetryConfig::from_env())?;

    info!("Starting Evidence Mock Service v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Configuration loaded");
    info!("  Listen address: {}", config.listen_addr);
    info!("  Evidence mode: {}", config.mode);
    if config.seed.is_some() {
        info!("  Generator seed: fixed");
    }

    let state = AppState::from_config(&config);
    info!("Loaded {} evidence templates", state.catalog.len());

    let mut app = build_router(state);
    if let Some(cors_layer) = cors_layer(config.cors_allow_origins.as_deref())? {
        app = app.layer(cors_layer);
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Evidence Mock Service is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Build the full application router with `state` applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(crate::api::router())
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: Option<&str>) -> anyhow::Result<Option<CorsLayer>> {
    let origins = match origins.map(str::trim) {
        Some(o) if !o.is_empty() => o,
        _ => return Ok(None),
    };

    let allow_origin = if origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin {s:?}: {e}"))
            })
            .collect::<anyhow::Result<_>>()?;
        AllowOrigin::list(origins)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    ))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
