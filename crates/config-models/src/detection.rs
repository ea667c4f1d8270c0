//! Detection Tuning Configuration

use crate::bounds::{FieldBounds, IntBounds};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Eye aspect ratio threshold slider range
pub const EAR_THRESHOLD_BOUNDS: FieldBounds = FieldBounds::new(0.1, 0.5, 0.01);

/// EAR consecutive-frame slider range
pub const EAR_CONSEC_FRAMES_BOUNDS: IntBounds = IntBounds::new(5, 100);

/// Mouth aspect ratio threshold slider range
pub const MAR_THRESHOLD_BOUNDS: FieldBounds = FieldBounds::new(0.5, 2.5, 0.05);

/// MAR consecutive-frame slider range
pub const MAR_CONSEC_FRAMES_BOUNDS: IntBounds = IntBounds::new(5, 50);

/// Drowsiness detection tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrowsinessConfig {
    /// Eye aspect ratio below which the eye counts as closed
    pub eye_aspect_ratio_threshold: f64,

    /// Consecutive closed-eye frames before a drowsiness alert
    pub eye_aspect_ratio_consec_frames: u32,

    /// Mouth aspect ratio above which the mouth counts as yawning
    pub mouth_aspect_ratio_threshold: f64,

    /// Consecutive yawning frames before a yawn event
    pub mouth_aspect_ratio_consec_frames: u32,

    /// Mask the face region before landmark extraction
    pub apply_masking: bool,
}

impl Default for DrowsinessConfig {
    fn default() -> Self {
        Self {
            eye_aspect_ratio_threshold: 0.25,
            eye_aspect_ratio_consec_frames: 48,
            mouth_aspect_ratio_threshold: 1.5,
            mouth_aspect_ratio_consec_frames: 21,
            apply_masking: true,
        }
    }
}

/// Phone detection tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneDetectionConfig {
    /// Hand-to-face pixel distance below which phone use is flagged
    pub distance_threshold: i64,
}

impl Default for PhoneDetectionConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 150,
        }
    }
}

/// Full detection configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub drowsiness: DrowsinessConfig,
    pub phone_detection: PhoneDetectionConfig,
}

impl DetectionConfig {
    /// Validate every bounded field, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        EAR_THRESHOLD_BOUNDS.check(
            "eye_aspect_ratio_threshold",
            self.drowsiness.eye_aspect_ratio_threshold,
        )?;
        EAR_CONSEC_FRAMES_BOUNDS.check(
            "eye_aspect_ratio_consec_frames",
            self.drowsiness.eye_aspect_ratio_consec_frames,
        )?;
        MAR_THRESHOLD_BOUNDS.check(
            "mouth_aspect_ratio_threshold",
            self.drowsiness.mouth_aspect_ratio_threshold,
        )?;
        MAR_CONSEC_FRAMES_BOUNDS.check(
            "mouth_aspect_ratio_consec_frames",
            self.drowsiness.mouth_aspect_ratio_consec_frames,
        )?;
        if self.phone_detection.distance_threshold < 0 {
            return Err(ConfigError::NegativeDistance(
                self.phone_detection.distance_threshold,
            ));
        }
        Ok(())
    }
}

/// Parse free-text distance-threshold input
///
/// The dashboard exposes this field as an unbounded number box, so the raw
/// string is parsed here rather than at the widget. Non-numeric or negative
/// input is rejected and never reaches a draft.
pub fn parse_distance_threshold(input: &str) -> Result<i64, ConfigError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidInteger(input.to_string()))?;
    if value < 0 {
        return Err(ConfigError::NegativeDistance(value));
    }
    Ok(value)
}
