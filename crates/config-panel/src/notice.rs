//! Transient Outcome Notices

use std::time::{Duration, Instant};

/// How long a notice stays visible before auto-dismissing
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single transient notice
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    posted_at: Instant,
    ttl: Duration,
}

impl Notice {
    fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= self.ttl
    }
}

/// Single-slot notice surface shared by both panels
///
/// Posting replaces any previous notice; an expired notice is simply no
/// longer reported, mirroring an auto-dismissing snackbar.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Option<Duration>,
}

impl NoticeBoard {
    /// Create a board with the default 4 second notice lifetime
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with a custom notice lifetime
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl: Some(ttl),
        }
    }

    /// Post a success notice
    pub fn post_success(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Success, message);
    }

    /// Post an error notice
    pub fn post_error(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Error, message);
    }

    fn post(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.current = Some(Notice {
            kind,
            message: message.into(),
            posted_at: Instant::now(),
            ttl: self.ttl.unwrap_or(NOTICE_TTL),
        });
    }

    /// Currently visible notice, if any and not yet expired
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().filter(|n| !n.is_expired())
    }

    /// Dismiss the current notice early
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_and_read() {
        let mut board = NoticeBoard::new();
        assert!(board.current().is_none());

        board.post_success("saved");
        let notice = board.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "saved");
    }

    #[test]
    fn newer_notice_replaces_older() {
        let mut board = NoticeBoard::new();
        board.post_success("saved");
        board.post_error("failed");
        assert_eq!(board.current().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn notice_expires() {
        let mut board = NoticeBoard::with_ttl(Duration::from_millis(5));
        board.post_error("failed");
        assert!(board.current().is_some());
        std::thread::sleep(Duration::from_millis(10));
        assert!(board.current().is_none());
    }

    #[test]
    fn dismiss_clears() {
        let mut board = NoticeBoard::new();
        board.post_success("saved");
        board.dismiss();
        assert!(board.current().is_none());
    }
}
