//! Configuration Payload Models
//!
//! Typed representations of the two configuration documents exchanged with
//! the dashboard backend:
//! - Detection tuning (drowsiness thresholds, phone-detection distance)
//! - Pipeline settings (model toggles, inference engine selection)
//!
//! Also carries the slider bounds for each tunable field and the
//! parse-and-validate helpers used by the editor panels.

mod bounds;
mod detection;
mod error;
mod pipeline;

pub use bounds::{FieldBounds, IntBounds};
pub use detection::{
    parse_distance_threshold, DetectionConfig, DrowsinessConfig, PhoneDetectionConfig,
    EAR_CONSEC_FRAMES_BOUNDS, EAR_THRESHOLD_BOUNDS, MAR_CONSEC_FRAMES_BOUNDS,
    MAR_THRESHOLD_BOUNDS,
};
pub use error::ConfigError;
pub use pipeline::{InferenceEngine, PipelineSettings};
