// src/api/mod.rs — HTTP trigger server for the web editor

pub mod handlers;
pub mod runs;
pub mod types;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::generator::{build_generator, ThemeGenerator};
use crate::infra::config::{Config, ServerConfig};
use crate::store::{HttpThemeStore, ThemeStore};
pub use runs::RunRegistry;
pub use types::{RunRequest, RunState, RunStatus};

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub generator: Arc<dyn ThemeGenerator>,
    pub store: Arc<dyn ThemeStore>,
    /// Iterations used when a request omits `iterations`.
    pub default_iterations: u32,
    /// Runs started by this server; finished ones are evicted past a cap.
    pub runs: Arc<Mutex<RunRegistry>>,
}

impl ApiState {
    pub fn new(config: Config) -> Self {
        Self::with_collaborators(
            build_generator(&config.generator),
            Arc::new(HttpThemeStore::new(config.api.base_url)),
            config.server.default_iterations,
        )
    }

    pub fn with_collaborators(
        generator: Arc<dyn ThemeGenerator>,
        store: Arc<dyn ThemeStore>,
        default_iterations: u32,
    ) -> Self {
        Self {
            generator,
            store,
            default_iterations,
            runs: Arc::new(Mutex::new(RunRegistry::default())),
        }
    }
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/api/agent/run", post(handlers::start_run))
        .route("/api/agent/runs/{id}", get(handlers::get_run))
        .route("/api/agent/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the configured port (runs until the process exits).
pub async fn start_server(config: &ServerConfig, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{}", config.port);

    let router = build_router(state);

    tracing::info!("Trigger API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
