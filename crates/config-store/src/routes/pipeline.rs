//! Pipeline Settings Routes

use axum::{extract::State, http::StatusCode, Json};
use config_models::PipelineSettings;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{StandardResponse, StoreState};

/// Get the current pipeline settings
pub async fn get_config(
    State(state): State<Arc<RwLock<StoreState>>>,
) -> Json<PipelineSettings> {
    Json(state.read().await.pipeline.clone())
}

/// Update the pipeline settings
///
/// Persists to disk and responds with a status envelope. The inference
/// engine change only takes effect after an application restart.
pub async fn update_config(
    State(state): State<Arc<RwLock<StoreState>>>,
    Json(req): Json<PipelineSettings>,
) -> Result<Json<StandardResponse>, (StatusCode, Json<StandardResponse>)> {
    let mut state = state.write().await;
    state.pipeline = req.clone();
    crate::persist::save_pipeline(&state.paths, &req).map_err(|e| {
        warn!(error = %e, "failed to persist pipeline settings");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StandardResponse::error(e.to_string())),
        )
    })?;

    info!(engine = %req.inference_engine, "pipeline settings updated");
    Ok(Json(StandardResponse::success(
        "Updated and applied pipeline settings",
    )))
}
