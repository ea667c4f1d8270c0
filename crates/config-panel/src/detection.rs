//! Detection Configuration Panel

use crate::notice::NoticeBoard;
use crate::widget::Widget;
use config_models::{
    parse_distance_threshold, ConfigError, DetectionConfig, DrowsinessConfig,
    PhoneDetectionConfig, EAR_CONSEC_FRAMES_BOUNDS, EAR_THRESHOLD_BOUNDS,
    MAR_CONSEC_FRAMES_BOUNDS, MAR_THRESHOLD_BOUNDS,
};
use config_sync::SyncClient;
use tracing::{debug, info, warn};

/// Visible tab of the detection panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionTab {
    #[default]
    Drowsiness,
    PhoneDetection,
}

/// Single-field edit of the detection draft
///
/// Slider edits carry the candidate value and are clamped to the field's
/// bounds; the distance threshold carries the raw text of the number box
/// and is parsed before it can touch the draft.
#[derive(Debug, Clone)]
pub enum DetectionEdit {
    EyeAspectRatioThreshold(f64),
    EyeAspectRatioConsecFrames(u32),
    MouthAspectRatioThreshold(f64),
    MouthAspectRatioConsecFrames(u32),
    ApplyMasking(bool),
    DistanceThreshold(String),
}

/// Editor state for the detection tuning document
pub struct DetectionPanel {
    client: SyncClient,
    draft: DetectionConfig,
    tab: DetectionTab,
    saving: bool,
    notices: NoticeBoard,
}

impl DetectionPanel {
    /// Create a panel with compiled-in defaults, before any load
    pub fn new(client: SyncClient) -> Self {
        Self {
            client,
            draft: DetectionConfig::default(),
            tab: DetectionTab::default(),
            saving: false,
            notices: NoticeBoard::new(),
        }
    }

    /// Load the remote document, replacing the whole draft on success
    ///
    /// On failure the defaults stay in place and an error notice is
    /// posted.
    pub async fn load(&mut self) {
        match self.client.fetch_detection().await {
            Ok(config) => {
                info!("detection configuration loaded");
                self.draft = config;
            }
            Err(e) => {
                warn!(error = %e, "failed to load detection configuration");
                self.notices.post_error("Failed to load detection configuration");
            }
        }
    }

    /// Apply one field edit, producing a new draft with every sibling
    /// field untouched
    pub fn apply(&mut self, edit: DetectionEdit) -> Result<(), ConfigError> {
        let drowsiness = self.draft.drowsiness.clone();
        let phone_detection = self.draft.phone_detection.clone();
        self.draft = match edit {
            DetectionEdit::EyeAspectRatioThreshold(v) => DetectionConfig {
                drowsiness: DrowsinessConfig {
                    eye_aspect_ratio_threshold: EAR_THRESHOLD_BOUNDS.clamp(v),
                    ..drowsiness
                },
                phone_detection,
            },
            DetectionEdit::EyeAspectRatioConsecFrames(v) => DetectionConfig {
                drowsiness: DrowsinessConfig {
                    eye_aspect_ratio_consec_frames: EAR_CONSEC_FRAMES_BOUNDS.clamp(v),
                    ..drowsiness
                },
                phone_detection,
            },
            DetectionEdit::MouthAspectRatioThreshold(v) => DetectionConfig {
                drowsiness: DrowsinessConfig {
                    mouth_aspect_ratio_threshold: MAR_THRESHOLD_BOUNDS.clamp(v),
                    ..drowsiness
                },
                phone_detection,
            },
            DetectionEdit::MouthAspectRatioConsecFrames(v) => DetectionConfig {
                drowsiness: DrowsinessConfig {
                    mouth_aspect_ratio_consec_frames: MAR_CONSEC_FRAMES_BOUNDS.clamp(v),
                    ..drowsiness
                },
                phone_detection,
            },
            DetectionEdit::ApplyMasking(on) => DetectionConfig {
                drowsiness: DrowsinessConfig {
                    apply_masking: on,
                    ..drowsiness
                },
                phone_detection,
            },
            DetectionEdit::DistanceThreshold(text) => {
                let distance = parse_distance_threshold(&text)?;
                DetectionConfig {
                    drowsiness,
                    phone_detection: PhoneDetectionConfig {
                        distance_threshold: distance,
                    },
                }
            }
        };
        Ok(())
    }

    /// Post the full draft to the store
    ///
    /// Repeated triggers while a save is in flight are coalesced; the
    /// outcome is posted to the notice board either way.
    pub async fn save(&mut self) {
        if self.saving {
            debug!("detection save already in flight, ignoring trigger");
            return;
        }
        self.saving = true;
        match self.client.save_detection(&self.draft).await {
            Ok(stored) => {
                info!(?stored, "detection configuration saved");
                self.notices.post_success("Detection configuration saved");
            }
            Err(e) => {
                warn!(error = %e, "failed to save detection configuration");
                self.notices.post_error("Failed to save detection configuration");
            }
        }
        self.saving = false;
    }

    /// Current draft
    pub fn draft(&self) -> &DetectionConfig {
        &self.draft
    }

    /// Active tab
    pub fn tab(&self) -> DetectionTab {
        self.tab
    }

    /// Switch the active tab
    pub fn select_tab(&mut self, tab: DetectionTab) {
        self.tab = tab;
    }

    /// Whether a save is currently in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Notice surface
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Notice surface, for dismissal
    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Widgets of the active tab; the save action is visible on both
    pub fn view(&self) -> Vec<Widget> {
        let mut widgets = match self.tab {
            DetectionTab::Drowsiness => vec![
                Widget::Slider {
                    label: "Eye Aspect Ratio (EAR) Threshold",
                    value: self.draft.drowsiness.eye_aspect_ratio_threshold,
                    bounds: EAR_THRESHOLD_BOUNDS,
                },
                Widget::IntSlider {
                    label: "EAR Consecutive Frames",
                    value: self.draft.drowsiness.eye_aspect_ratio_consec_frames,
                    bounds: EAR_CONSEC_FRAMES_BOUNDS,
                },
                Widget::Slider {
                    label: "Mouth Aspect Ratio (MAR) Threshold",
                    value: self.draft.drowsiness.mouth_aspect_ratio_threshold,
                    bounds: MAR_THRESHOLD_BOUNDS,
                },
                Widget::IntSlider {
                    label: "MAR Consecutive Frames",
                    value: self.draft.drowsiness.mouth_aspect_ratio_consec_frames,
                    bounds: MAR_CONSEC_FRAMES_BOUNDS,
                },
                Widget::Toggle {
                    label: "Apply Masking",
                    on: self.draft.drowsiness.apply_masking,
                },
            ],
            DetectionTab::PhoneDetection => vec![Widget::NumberField {
                label: "Phone Detection Distance Threshold",
                value: self.draft.phone_detection.distance_threshold,
            }],
        };
        widgets.push(Widget::SaveButton {
            enabled: !self.saving,
        });
        widgets
    }
}
