//! Configuration Store Server
//!
//! REST configuration store backing the driver-monitoring dashboard.
//! Serves and persists the detection tuning and pipeline settings
//! documents as JSON files on disk.

use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod persist;
mod routes;
mod settings;

pub use persist::{StoreError, StorePaths};
pub use settings::StoreSettings;

use config_models::{DetectionConfig, PipelineSettings};

/// Application state shared across handlers
pub struct StoreState {
    /// Current detection tuning document
    pub detection: DetectionConfig,
    /// Current pipeline settings document
    pub pipeline: PipelineSettings,
    /// File locations for persistence
    pub paths: StorePaths,
}

impl StoreState {
    /// Load state from disk, falling back to defaults for absent files
    pub fn load(paths: StorePaths) -> Result<Self, StoreError> {
        Ok(Self {
            detection: persist::load_detection(&paths)?,
            pipeline: persist::load_pipeline(&paths)?,
            paths,
        })
    }
}

/// Status envelope returned by update endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct StandardResponse {
    pub status: String,
    pub message: String,
}

impl StandardResponse {
    /// Success envelope
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    /// Error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Create the application router
pub fn create_router(state: Arc<RwLock<StoreState>>) -> Router {
    Router::new()
        .route(
            "/config/detection",
            get(routes::detection::get_config).post(routes::detection::update_config),
        )
        .route("/config/pipeline", get(routes::pipeline::get_config))
        .route("/config/pipeline/update", post(routes::pipeline::update_config))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: &StoreSettings) -> Result<(), Box<dyn std::error::Error>> {
    let paths = StorePaths::new(settings.data_dir.clone());
    let state = Arc::new(RwLock::new(StoreState::load(paths)?));
    let app = create_router(state);

    info!("Starting configuration store on {}", settings.listen_addr);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
