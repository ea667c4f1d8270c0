//! Detection Configuration Routes

use axum::{extract::State, http::StatusCode, Json};
use config_models::DetectionConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{StandardResponse, StoreState};

/// Get the current detection configuration
pub async fn get_config(
    State(state): State<Arc<RwLock<StoreState>>>,
) -> Json<DetectionConfig> {
    Json(state.read().await.detection.clone())
}

/// Update the detection configuration
///
/// Validates every bounded field, persists to disk, and echoes the
/// stored document back to the caller.
pub async fn update_config(
    State(state): State<Arc<RwLock<StoreState>>>,
    Json(req): Json<DetectionConfig>,
) -> Result<Json<DetectionConfig>, (StatusCode, Json<StandardResponse>)> {
    if let Err(e) = req.validate() {
        warn!(error = %e, "rejecting detection config update");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(StandardResponse::error(e.to_string())),
        ));
    }

    let mut state = state.write().await;
    state.detection = req.clone();
    crate::persist::save_detection(&state.paths, &req).map_err(|e| {
        warn!(error = %e, "failed to persist detection config");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StandardResponse::error(e.to_string())),
        )
    })?;

    info!("detection configuration updated");
    Ok(Json(req))
}
