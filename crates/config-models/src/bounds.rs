//! Slider Bounds for Tunable Fields

use crate::error::ConfigError;

/// Bounds for a float-valued slider (inclusive range plus step size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    /// Create new bounds
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a candidate value into range and snap it to the nearest step
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Whether the value lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validate a value against the range
    pub fn check(&self, field: &'static str, value: f64) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Bounds for an integer-valued slider (step is always 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntBounds {
    pub min: u32,
    pub max: u32,
}

impl IntBounds {
    /// Create new bounds
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Clamp a candidate value into range
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Whether the value lies inside the range
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validate a value against the range
    pub fn check(&self, field: &'static str, value: u32) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value: value as f64,
                min: self.min as f64,
                max: self.max as f64,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamp_respects_range() {
        let bounds = FieldBounds::new(0.1, 0.5, 0.01);
        assert!((bounds.clamp(0.9) - 0.5).abs() < 1e-9);
        assert!((bounds.clamp(-3.0) - 0.1).abs() < 1e-9);
        assert!((bounds.clamp(0.22) - 0.22).abs() < 1e-9);
    }

    #[test]
    fn clamp_snaps_to_step() {
        let bounds = FieldBounds::new(0.1, 0.5, 0.01);
        // 0.2234 is finer than the 0.01 step, snaps to 0.22
        assert!((bounds.clamp(0.2234) - 0.22).abs() < 1e-9);
        let coarse = FieldBounds::new(0.5, 2.5, 0.05);
        assert!((coarse.clamp(1.52) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn int_clamp() {
        let bounds = IntBounds::new(5, 100);
        assert_eq!(bounds.clamp(200), 100);
        assert_eq!(bounds.clamp(1), 5);
        assert_eq!(bounds.clamp(48), 48);
    }

    #[test]
    fn check_reports_range() {
        let bounds = IntBounds::new(5, 50);
        assert!(bounds.check("mouth_aspect_ratio_consec_frames", 21).is_ok());
        let err = bounds
            .check("mouth_aspect_ratio_consec_frames", 51)
            .unwrap_err();
        assert!(err.to_string().contains("[5, 50]"));
    }

    proptest! {
        #[test]
        fn clamped_value_always_in_range(value in -10.0f64..10.0) {
            let bounds = FieldBounds::new(0.1, 0.5, 0.01);
            let clamped = bounds.clamp(value);
            prop_assert!(clamped >= bounds.min - 1e-9);
            prop_assert!(clamped <= bounds.max + 1e-9);
        }

        #[test]
        fn clamped_value_is_step_aligned(value in -10.0f64..10.0) {
            let bounds = FieldBounds::new(0.5, 2.5, 0.05);
            let clamped = bounds.clamp(value);
            let steps = (clamped - bounds.min) / bounds.step;
            prop_assert!((steps - steps.round()).abs() < 1e-6);
        }
    }
}
