//! Renderer-Facing Widget Descriptions
//!
//! Panels describe their visible form through these values; the frontend
//! draws them without reaching into panel internals.

use config_models::{FieldBounds, IntBounds};

/// One element of a panel's form
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Bounded float slider
    Slider {
        label: &'static str,
        value: f64,
        bounds: FieldBounds,
    },
    /// Bounded integer slider
    IntSlider {
        label: &'static str,
        value: u32,
        bounds: IntBounds,
    },
    /// Boolean switch
    Toggle { label: &'static str, on: bool },
    /// Unbounded integer entry box
    NumberField { label: &'static str, value: i64 },
    /// Fixed-option select, with an optional informational tooltip
    Select {
        label: &'static str,
        options: &'static [&'static str],
        selected: &'static str,
        hint: Option<&'static str>,
    },
    /// Conditional warning banner
    WarningBanner { message: &'static str },
    /// Save action, disabled while a save is in flight
    SaveButton { enabled: bool },
}
