//! Toast-backed notifier for the gallery view-model.

use cloud_gallery_core::{Notice, NoticeLevel, Notifier};
use dioxus_primitives::toast::{ToastOptions, Toasts};

/// Shows each gallery notice as a toast.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Toasts,
}

impl ToastNotifier {
    pub const fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let options = match notice.detail {
            Some(detail) => ToastOptions::new().description(detail),
            None => ToastOptions::new(),
        };
        match notice.level {
            NoticeLevel::Success => self.toasts.success(notice.title, options),
            NoticeLevel::Warning => self.toasts.warning(notice.title, options),
            NoticeLevel::Error => self.toasts.error(notice.title, options),
        }
    }
}
