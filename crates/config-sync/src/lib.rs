//! Configuration Sync Client
//!
//! Thin HTTP wrapper exchanging configuration JSON with the dashboard
//! backend:
//! - GET/POST of the detection tuning document
//! - GET/POST of the pipeline settings document
//!
//! The base URL is injected at construction; nothing here reads global
//! endpoint constants. A mock mode backs the same API with an in-memory
//! store so editor panels can be tested without a network.

use config_models::{DetectionConfig, PipelineSettings};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

const DETECTION_ENDPOINT: &str = "/config/detection";
const PIPELINE_ENDPOINT: &str = "/config/pipeline";
const PIPELINE_UPDATE_ENDPOINT: &str = "/config/pipeline/update";

/// Sync error types
///
/// Every failure is either a load or a save failure; non-2xx statuses
/// count as failures of the request they belong to.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("failed to load {endpoint}: {detail}")]
    Fetch {
        endpoint: &'static str,
        detail: String,
    },

    #[error("failed to save {endpoint}: {detail}")]
    Save {
        endpoint: &'static str,
        detail: String,
    },
}

/// In-memory stand-in for the remote store, used in mock mode
#[derive(Debug, Default)]
pub struct MockStore {
    pub detection: DetectionConfig,
    pub pipeline: PipelineSettings,
    pub failing: bool,
    pub detection_saves: Vec<DetectionConfig>,
    pub pipeline_saves: Vec<PipelineSettings>,
}

/// Shared handle to a mock store, for presetting payloads and inspecting
/// what a client saved
#[derive(Clone, Debug, Default)]
pub struct MockHandle(Arc<Mutex<MockStore>>);

impl MockHandle {
    /// Preset the detection document returned by the next fetch
    pub fn set_detection(&self, config: DetectionConfig) {
        self.lock().detection = config;
    }

    /// Preset the pipeline document returned by the next fetch
    pub fn set_pipeline(&self, settings: PipelineSettings) {
        self.lock().pipeline = settings;
    }

    /// Make every subsequent request fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Detection documents saved through the client, oldest first
    pub fn detection_saves(&self) -> Vec<DetectionConfig> {
        self.lock().detection_saves.clone()
    }

    /// Pipeline documents saved through the client, oldest first
    pub fn pipeline_saves(&self) -> Vec<PipelineSettings> {
        self.lock().pipeline_saves.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockStore> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// HTTP client for the remote configuration store
pub struct SyncClient {
    base_url: String,
    http: reqwest::Client,
    mock: Option<MockHandle>,
}

impl SyncClient {
    /// Create a client against the given base URL (e.g. `http://127.0.0.1:8080`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            mock: None,
        }
    }

    /// Create a mock client backed by an in-memory store (no network)
    pub fn mock() -> (Self, MockHandle) {
        let handle = MockHandle::default();
        let client = Self {
            base_url: "mock".to_string(),
            http: reqwest::Client::new(),
            mock: Some(handle.clone()),
        };
        (client, handle)
    }

    /// Base URL this client was constructed with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load the detection tuning document
    pub async fn fetch_detection(&self) -> Result<DetectionConfig, SyncError> {
        if let Some(mock) = &self.mock {
            debug!("mock mode: serving detection config from memory");
            let store = mock.lock();
            if store.failing {
                return Err(fetch_error(DETECTION_ENDPOINT, "mock failure"));
            }
            return Ok(store.detection.clone());
        }

        debug!(endpoint = DETECTION_ENDPOINT, "fetching detection config");
        let url = format!("{}{}", self.base_url, DETECTION_ENDPOINT);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(DETECTION_ENDPOINT, e))?;
        response
            .json::<DetectionConfig>()
            .await
            .map_err(|e| fetch_error(DETECTION_ENDPOINT, e))
    }

    /// Save the detection tuning document; the store echoes the persisted value
    pub async fn save_detection(
        &self,
        config: &DetectionConfig,
    ) -> Result<DetectionConfig, SyncError> {
        if let Some(mock) = &self.mock {
            debug!("mock mode: recording detection save");
            let mut store = mock.lock();
            if store.failing {
                return Err(save_error(DETECTION_ENDPOINT, "mock failure"));
            }
            store.detection = config.clone();
            store.detection_saves.push(config.clone());
            return Ok(config.clone());
        }

        debug!(endpoint = DETECTION_ENDPOINT, "saving detection config");
        let url = format!("{}{}", self.base_url, DETECTION_ENDPOINT);
        let response = self
            .http
            .post(&url)
            .json(config)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| save_error(DETECTION_ENDPOINT, e))?;
        response
            .json::<DetectionConfig>()
            .await
            .map_err(|e| save_error(DETECTION_ENDPOINT, e))
    }

    /// Load the pipeline settings document
    pub async fn fetch_pipeline(&self) -> Result<PipelineSettings, SyncError> {
        if let Some(mock) = &self.mock {
            debug!("mock mode: serving pipeline settings from memory");
            let store = mock.lock();
            if store.failing {
                return Err(fetch_error(PIPELINE_ENDPOINT, "mock failure"));
            }
            return Ok(store.pipeline.clone());
        }

        debug!(endpoint = PIPELINE_ENDPOINT, "fetching pipeline settings");
        let url = format!("{}{}", self.base_url, PIPELINE_ENDPOINT);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(PIPELINE_ENDPOINT, e))?;
        response
            .json::<PipelineSettings>()
            .await
            .map_err(|e| fetch_error(PIPELINE_ENDPOINT, e))
    }

    /// Save the pipeline settings document
    ///
    /// The store responds with a status envelope the dashboard does not
    /// interpret, so only the HTTP status is checked here.
    pub async fn save_pipeline(&self, settings: &PipelineSettings) -> Result<(), SyncError> {
        if let Some(mock) = &self.mock {
            debug!("mock mode: recording pipeline save");
            let mut store = mock.lock();
            if store.failing {
                return Err(save_error(PIPELINE_UPDATE_ENDPOINT, "mock failure"));
            }
            store.pipeline = settings.clone();
            store.pipeline_saves.push(settings.clone());
            return Ok(());
        }

        debug!(endpoint = PIPELINE_UPDATE_ENDPOINT, "saving pipeline settings");
        let url = format!("{}{}", self.base_url, PIPELINE_UPDATE_ENDPOINT);
        self.http
            .post(&url)
            .json(settings)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| save_error(PIPELINE_UPDATE_ENDPOINT, e))?;
        Ok(())
    }
}

fn fetch_error(endpoint: &'static str, detail: impl ToString) -> SyncError {
    SyncError::Fetch {
        endpoint,
        detail: detail.to_string(),
    }
}

fn save_error(endpoint: &'static str, detail: impl ToString) -> SyncError {
    SyncError::Save {
        endpoint,
        detail: detail.to_string(),
    }
}
