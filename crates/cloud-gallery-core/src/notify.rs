//! User-facing notifications.
//!
//! The view-model reports every outcome through a [`Notifier`] supplied by
//! the presentation layer (toasts on desktop, stderr lines in the CLI).

use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// One non-blocking, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {detail}", self.title),
            None => f.write_str(&self.title),
        }
    }
}

/// Capability for emitting notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn success(&self, title: &str, detail: Option<String>) {
        self.notify(build(NoticeLevel::Success, title, detail));
    }

    fn warning(&self, title: &str, detail: Option<String>) {
        self.notify(build(NoticeLevel::Warning, title, detail));
    }

    fn error(&self, title: &str, detail: Option<String>) {
        self.notify(build(NoticeLevel::Error, title, detail));
    }
}

fn build(level: NoticeLevel, title: &str, detail: Option<String>) -> Notice {
    let notice = Notice::new(level, title);
    match detail {
        Some(detail) => notice.with_detail(detail),
        None => notice,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[test]
    fn helpers_set_level_and_detail() {
        let recorder = Recorder::default();
        recorder.success("Uploaded", None);
        recorder.error("Delete failed", Some("HTTP 500".to_string()));

        let notices = recorder.0.borrow();
        assert_eq!(notices[0], Notice::new(NoticeLevel::Success, "Uploaded"));
        assert_eq!(notices[1].level, NoticeLevel::Error);
        assert_eq!(notices[1].to_string(), "Delete failed: HTTP 500");
    }
}
