//! File-Backed Persistence

use config_models::{DetectionConfig, PipelineSettings};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File locations of the persisted documents
#[derive(Debug, Clone)]
pub struct StorePaths {
    data_dir: PathBuf,
}

impl StorePaths {
    /// Paths rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Detection tuning document path
    pub fn detection(&self) -> PathBuf {
        self.data_dir.join("detection_settings.json")
    }

    /// Pipeline settings document path
    pub fn pipeline(&self) -> PathBuf {
        self.data_dir.join("pipeline_settings.json")
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }
}

/// Load the detection document, defaulting when the file is absent
pub fn load_detection(paths: &StorePaths) -> Result<DetectionConfig, StoreError> {
    load_or_default(&paths.detection())
}

/// Load the pipeline document, defaulting when the file is absent
pub fn load_pipeline(paths: &StorePaths) -> Result<PipelineSettings, StoreError> {
    load_or_default(&paths.pipeline())
}

/// Persist the detection document
pub fn save_detection(paths: &StorePaths, config: &DetectionConfig) -> Result<(), StoreError> {
    paths.ensure_dir()?;
    write_pretty(&paths.detection(), config)
}

/// Persist the pipeline document
pub fn save_pipeline(paths: &StorePaths, settings: &PipelineSettings) -> Result<(), StoreError> {
    paths.ensure_dir()?;
    write_pretty(&paths.pipeline(), settings)
}

fn load_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if !path.exists() {
        info!(path = %path.display(), "config file absent, using defaults");
        return Ok(T::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw)?;
    Ok(())
}
