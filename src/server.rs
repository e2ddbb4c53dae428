// ABOUTME: Server resources and axum application wiring
// ABOUTME: Builds the router with tracing, CORS, and timeout layers, and runs the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Server resources and HTTP application assembly

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::environment::ServerConfig;
use crate::errors::AppError;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::routes::{CoachRoutes, HealthRoutes, PlanRoutes};

/// Shared resources injected into every route handler
///
/// The provider is optional by design: a server deployed without the
/// credential still starts and serves health checks, and both operations
/// fail with a 500-class `CONFIG_MISSING` before any provider call is
/// attempted.
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    provider: Option<Arc<dyn LlmProvider>>,
}

impl ServerResources {
    /// Create resources with an explicit provider (used by tests)
    #[must_use]
    pub fn new(config: ServerConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { config, provider }
    }

    /// Create resources, attempting to build the Gemini provider from the
    /// environment
    #[must_use]
    pub fn from_env(config: ServerConfig) -> Self {
        let provider: Option<Arc<dyn LlmProvider>> = match GeminiProvider::from_env() {
            Ok(provider) => {
                let provider = match config.llm.model.clone() {
                    Some(model) => provider.with_default_model(model),
                    None => provider,
                };
                info!(provider = provider.name(), model = provider.default_model(), "LLM provider initialized");
                Some(Arc::new(provider))
            }
            Err(error) => {
                warn!(%error, "LLM provider not configured; plan and coach requests will fail");
                None
            }
        };

        Self { config, provider }
    }

    /// Get the configured provider
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no provider credential was available at
    /// startup.
    pub fn provider(&self) -> Result<Arc<dyn LlmProvider>, AppError> {
        self.provider
            .clone()
            .ok_or_else(|| AppError::config_missing(crate::llm::GEMINI_API_KEY_ENV))
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let timeout = Duration::from_secs(resources.config.request_timeout_secs);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources.clone()))
        .merge(CoachRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
}

/// Bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!(
        "{}:{}",
        resources.config.host, resources.config.http_port
    );
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Coach server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Failed to install shutdown signal handler");
    }
    info!("Shutdown signal received");
}
