//! Pipeline Settings

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inference engine selection
///
/// Changing this takes effect only after an application restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceEngine {
    #[default]
    Cpu,
    Auto,
}

impl InferenceEngine {
    /// Wire name of the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceEngine::Cpu => "cpu",
            InferenceEngine::Auto => "auto",
        }
    }

    /// All selectable engines, in display order
    pub const ALL: [InferenceEngine; 2] = [InferenceEngine::Cpu, InferenceEngine::Auto];
}

impl fmt::Display for InferenceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InferenceEngine {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(InferenceEngine::Cpu),
            "auto" => Ok(InferenceEngine::Auto),
            other => Err(ConfigError::UnknownEngine(other.to_string())),
        }
    }
}

/// Pipeline feature toggles and engine selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Run the drowsiness detection model
    pub drowsiness_model_run: bool,

    /// Run the phone detection model
    pub phone_detection_model_run: bool,

    /// Run the hands detection model
    pub hands_detection_model_run: bool,

    /// Inference engine (restart required to apply)
    pub inference_engine: InferenceEngine,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            drowsiness_model_run: true,
            phone_detection_model_run: false,
            hands_detection_model_run: false,
            inference_engine: InferenceEngine::Cpu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_wire_names() {
        assert_eq!(
            serde_json::to_string(&InferenceEngine::Cpu).unwrap(),
            "\"cpu\""
        );
        assert_eq!(
            serde_json::to_string(&InferenceEngine::Auto).unwrap(),
            "\"auto\""
        );
        assert_eq!("auto".parse::<InferenceEngine>().unwrap(), InferenceEngine::Auto);
        assert!("gpu".parse::<InferenceEngine>().is_err());
    }

    #[test]
    fn defaults_match_dashboard() {
        let settings = PipelineSettings::default();
        assert!(settings.drowsiness_model_run);
        assert!(!settings.phone_detection_model_run);
        assert!(!settings.hands_detection_model_run);
        assert_eq!(settings.inference_engine, InferenceEngine::Cpu);
    }

    #[test]
    fn wire_format_round_trip() {
        let json = r#"{
            "drowsiness_model_run": false,
            "phone_detection_model_run": true,
            "hands_detection_model_run": true,
            "inference_engine": "auto"
        }"#;
        let settings: PipelineSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.drowsiness_model_run);
        assert!(settings.phone_detection_model_run);
        assert_eq!(settings.inference_engine, InferenceEngine::Auto);
    }
}
