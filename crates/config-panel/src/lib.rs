//! Configuration Editor Panels
//!
//! Headless state containers behind the two dashboard configuration
//! panels:
//! - [`DetectionPanel`] — drowsiness thresholds and phone-detection
//!   distance, edited across two tabs
//! - [`PipelinePanel`] — model toggles and inference engine selection,
//!   with a restart warning when the engine differs from the last
//!   loaded value
//!
//! Each panel owns exactly one draft of its document: created with
//! compiled-in defaults, replaced wholesale by a successful load, edited
//! one leaf field at a time, and posted back verbatim on save. Load and
//! save borrow the panel mutably for their whole lifetime, so a pending
//! request can never outlive the panel it belongs to; dropping the
//! future cancels the request.
//!
//! Both panels report load and save outcomes through the same
//! [`NoticeBoard`], so no failure is silent.

mod detection;
mod notice;
mod pipeline;
mod widget;

pub use detection::{DetectionEdit, DetectionPanel, DetectionTab};
pub use notice::{Notice, NoticeBoard, NoticeKind, NOTICE_TTL};
pub use pipeline::{PipelineEdit, PipelinePanel};
pub use widget::Widget;
