//! Application state management
//!
//! Shared via a Dioxus context provider below the toast provider.

use dioxus::prelude::*;

use cloud_gallery_core::GalleryState;

use crate::services::DesktopGallery;

#[derive(Clone)]
pub struct AppState {
    /// Command handlers for user intents
    pub gallery: DesktopGallery,
    /// Latest published gallery snapshot, re-rendered on change
    pub snapshot: Signal<GalleryState>,
}

impl AppState {
    /// Name of the pending upload, if any
    pub fn selected_file_name(&self) -> Option<String> {
        self.snapshot
            .read()
            .selected_file
            .as_ref()
            .map(|file| file.file_name.clone())
    }
}
