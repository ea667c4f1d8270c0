//! Pipeline Configuration Panel

use crate::notice::NoticeBoard;
use crate::widget::Widget;
use config_models::{InferenceEngine, PipelineSettings};
use config_sync::SyncClient;
use tracing::{debug, info, warn};

const ENGINE_RESTART_HINT: &str = "Changing this requires application restart";
const ENGINE_RESTART_WARNING: &str =
    "You are about to change the inference engine. Restart the application for changes to take effect.";

/// Single-field edit of the pipeline draft
#[derive(Debug, Clone)]
pub enum PipelineEdit {
    RunDrowsinessModel(bool),
    RunPhoneDetectionModel(bool),
    RunHandsDetectionModel(bool),
    Engine(InferenceEngine),
}

/// Editor state for the pipeline settings document
pub struct PipelinePanel {
    client: SyncClient,
    draft: PipelineSettings,
    /// Engine value captured at the most recent successful load; `None`
    /// until a load succeeds. Deliberately not refreshed by a save: the
    /// restart warning must stay up until the application is actually
    /// reloaded with the new engine.
    baseline_engine: Option<InferenceEngine>,
    saving: bool,
    notices: NoticeBoard,
}

impl PipelinePanel {
    /// Create a panel with compiled-in defaults, before any load
    pub fn new(client: SyncClient) -> Self {
        Self {
            client,
            draft: PipelineSettings::default(),
            baseline_engine: None,
            saving: false,
            notices: NoticeBoard::new(),
        }
    }

    /// Load the remote document, replacing the draft and capturing the
    /// engine baseline on success
    pub async fn load(&mut self) {
        match self.client.fetch_pipeline().await {
            Ok(settings) => {
                info!(engine = %settings.inference_engine, "pipeline settings loaded");
                self.baseline_engine = Some(settings.inference_engine);
                self.draft = settings;
            }
            Err(e) => {
                warn!(error = %e, "failed to load pipeline settings");
                self.notices.post_error("Failed to load pipeline settings");
            }
        }
    }

    /// Apply one field edit, leaving every sibling field untouched
    pub fn apply(&mut self, edit: PipelineEdit) {
        let previous = self.draft.clone();
        self.draft = match edit {
            PipelineEdit::RunDrowsinessModel(on) => PipelineSettings {
                drowsiness_model_run: on,
                ..previous
            },
            PipelineEdit::RunPhoneDetectionModel(on) => PipelineSettings {
                phone_detection_model_run: on,
                ..previous
            },
            PipelineEdit::RunHandsDetectionModel(on) => PipelineSettings {
                hands_detection_model_run: on,
                ..previous
            },
            PipelineEdit::Engine(engine) => PipelineSettings {
                inference_engine: engine,
                ..previous
            },
        };
    }

    /// Whether the selected engine differs from the last loaded value
    ///
    /// True while no load has succeeded yet (the baseline is unset), which
    /// keeps the restart warning up until the server state is known.
    pub fn has_pending_engine_change(&self) -> bool {
        self.baseline_engine != Some(self.draft.inference_engine)
    }

    /// Post the full draft to the store
    ///
    /// Repeated triggers while a save is in flight are coalesced; success
    /// and failure both surface as a transient notice.
    pub async fn save(&mut self) {
        if self.saving {
            debug!("pipeline save already in flight, ignoring trigger");
            return;
        }
        self.saving = true;
        match self.client.save_pipeline(&self.draft).await {
            Ok(()) => {
                info!("pipeline settings saved");
                self.notices
                    .post_success("Pipeline configuration saved successfully!");
            }
            Err(e) => {
                warn!(error = %e, "failed to save pipeline settings");
                self.notices
                    .post_error("Failed to save pipeline configuration.");
            }
        }
        self.saving = false;
    }

    /// Current draft
    pub fn draft(&self) -> &PipelineSettings {
        &self.draft
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

    /// Widgets of the panel's single tab
    pub fn view(&self) -> Vec<Widget> {
        let mut widgets = vec![
            Widget::Toggle {
                label: "Run Drowsiness Detection",
                on: self.draft.drowsiness_model_run,
            },
            Widget::Toggle {
                label: "Run Phone Detection",
                on: self.draft.phone_detection_model_run,
            },
            Widget::Toggle {
                label: "Run Hands Detection",
                on: self.draft.hands_detection_model_run,
            },
            Widget::Select {
                label: "Inference Engine",
                options: &["cpu", "auto"],
                selected: self.draft.inference_engine.as_str(),
                hint: Some(ENGINE_RESTART_HINT),
            },
        ];
        if self.has_pending_engine_change() {
            widgets.push(Widget::WarningBanner {
                message: ENGINE_RESTART_WARNING,
            });
        }
        widgets.push(Widget::SaveButton {
            enabled: !self.saving,
        });
        widgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoticeKind;

    fn has_banner(panel: &PipelinePanel) -> bool {
        panel
            .view()
            .iter()
            .any(|w| matches!(w, Widget::WarningBanner { .. }))
    }

    #[tokio::test]
    async fn successful_load_replaces_draft_and_baseline() {
        let (client, handle) = SyncClient::mock();
        let mut server = PipelineSettings::default();
        server.inference_engine = InferenceEngine::Auto;
        server.phone_detection_model_run = true;
        handle.set_pipeline(server.clone());

        let mut panel = PipelinePanel::new(client);
        panel.load().await;

        assert_eq!(panel.draft(), &server);
        assert!(!panel.has_pending_engine_change());
    }

    #[tokio::test]
    async fn failed_load_keeps_defaults_and_notifies() {
        let (client, handle) = SyncClient::mock();
        handle.set_failing(true);
        let mut panel = PipelinePanel::new(client);
        panel.load().await;

        assert_eq!(panel.draft(), &PipelineSettings::default());
        assert_eq!(panel.notices().current().unwrap().kind, NoticeKind::Error);
        // baseline stays unset, so the warning remains up
        assert!(panel.has_pending_engine_change());
    }

    #[test]
    fn pending_change_true_before_any_load() {
        let (client, _handle) = SyncClient::mock();
        let panel = PipelinePanel::new(client);
        assert!(panel.has_pending_engine_change());
        assert!(has_banner(&panel));
    }

    #[tokio::test]
    async fn engine_edit_raises_warning_and_reload_clears_it() {
        let (client, handle) = SyncClient::mock();
        handle.set_pipeline(PipelineSettings::default());
        let mut panel = PipelinePanel::new(client);
        panel.load().await;
        assert!(!has_banner(&panel));

        panel.apply(PipelineEdit::Engine(InferenceEngine::Auto));
        assert!(panel.has_pending_engine_change());
        assert!(has_banner(&panel));

        // remount without saving: a fresh panel re-captures the baseline
        // from the (unchanged) server state, so the warning is gone
        let (client, handle) = SyncClient::mock();
        handle.set_pipeline(PipelineSettings::default());
        let mut fresh = PipelinePanel::new(client);
        fresh.load().await;
        assert!(!has_banner(&fresh));
    }

    #[tokio::test]
    async fn save_does_not_refresh_baseline() {
        let (client, handle) = SyncClient::mock();
        handle.set_pipeline(PipelineSettings::default());
        let mut panel = PipelinePanel::new(client);
        panel.load().await;

        panel.apply(PipelineEdit::Engine(InferenceEngine::Auto));
        panel.save().await;

        assert_eq!(handle.pipeline_saves().len(), 1);
        // still pending: the running application has not restarted
        assert!(panel.has_pending_engine_change());
    }

    #[test]
    fn toggle_edits_are_isolated() {
        let (client, _handle) = SyncClient::mock();
        let mut panel = PipelinePanel::new(client);

        panel.apply(PipelineEdit::RunHandsDetectionModel(true));
        let draft = panel.draft();
        assert!(draft.hands_detection_model_run);
        assert!(draft.drowsiness_model_run);
        assert!(!draft.phone_detection_model_run);
        assert_eq!(draft.inference_engine, InferenceEngine::Cpu);

        panel.apply(PipelineEdit::RunDrowsinessModel(false));
        let draft = panel.draft();
        assert!(!draft.drowsiness_model_run);
        assert!(draft.hands_detection_model_run);
    }

    #[tokio::test]
    async fn save_sends_all_four_fields() {
        let (client, handle) = SyncClient::mock();
        let mut panel = PipelinePanel::new(client);
        panel.apply(PipelineEdit::RunPhoneDetectionModel(true));
        panel.apply(PipelineEdit::Engine(InferenceEngine::Auto));

        panel.save().await;

        let saves = handle.pipeline_saves();
        assert_eq!(saves.len(), 1);
        assert_eq!(&saves[0], panel.draft());
        assert_eq!(
            panel.notices().current().unwrap().kind,
            NoticeKind::Success
        );
    }

    #[tokio::test]
    async fn save_failure_posts_error_notice() {
        let (client, handle) = SyncClient::mock();
        handle.set_failing(true);
        let mut panel = PipelinePanel::new(client);

        panel.save().await;
        assert!(handle.pipeline_saves().is_empty());
        assert_eq!(panel.notices().current().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn in_flight_save_coalesces_triggers() {
        let (client, handle) = SyncClient::mock();
        let mut panel = PipelinePanel::new(client);

        panel.saving = true;
        assert!(panel.view().contains(&Widget::SaveButton { enabled: false }));
        panel.save().await;
        assert!(handle.pipeline_saves().is_empty());
    }

    #[test]
    fn select_reflects_current_engine() {
        let (client, _handle) = SyncClient::mock();
        let mut panel = PipelinePanel::new(client);
        panel.apply(PipelineEdit::Engine(InferenceEngine::Auto));
        assert!(panel.view().iter().any(|w| matches!(
            w,
            Widget::Select { selected: "auto", .. }
        )));
    }
}
