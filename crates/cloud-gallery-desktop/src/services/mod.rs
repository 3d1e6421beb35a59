//! Application services
//!
//! Wiring between the core view-model and the desktop runtime.

mod gallery;
mod toast_notifier;

pub use gallery::{connect_gallery, DesktopGallery};
pub use toast_notifier::ToastNotifier;
