//! Desktop gallery construction.

use cloud_gallery_core::{GalleryConfig, GalleryViewModel, HttpFileApi};
use dioxus_primitives::toast::Toasts;

use super::ToastNotifier;

/// View-model type used throughout the desktop UI.
pub type DesktopGallery = GalleryViewModel<HttpFileApi, ToastNotifier>;

/// Builds the gallery view-model from the on-disk config.
///
/// An unreadable config file is logged and replaced by defaults so the app
/// still starts against the default backend.
pub fn connect_gallery(toasts: Toasts) -> Result<DesktopGallery, String> {
    let config = GalleryConfig::load().unwrap_or_else(|error| {
        tracing::warn!("Failed to load gallery config: {}", error);
        GalleryConfig::default()
    });
    tracing::info!("Using backend {}", config.api_base_url);

    let api = HttpFileApi::new(&config).map_err(|error| error.to_string())?;
    Ok(GalleryViewModel::new(api, ToastNotifier::new(toasts)))
}
