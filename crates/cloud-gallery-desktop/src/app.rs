//! Main application component

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastProvider};

use cloud_gallery_core::GalleryState;

use crate::components::{ButtonVariant, GalleryGrid, UiButton, UploadBar, APP_STYLES};
use crate::services::{connect_gallery, DesktopGallery};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        style { "{APP_STYLES}" }
        ToastProvider {
            GalleryShell {}
        }
    }
}

#[component]
fn GalleryShell() -> Element {
    let toasts = use_toast();
    let gallery = use_hook(|| connect_gallery(toasts));

    match gallery {
        Ok(gallery) => rsx! {
            GalleryPage { gallery }
        },
        Err(error) => rsx! {
            div {
                class: "gallery-error",
                "Cloud Gallery could not start: {error}"
            }
        },
    }
}

#[component]
fn GalleryPage(gallery: DesktopGallery) -> Element {
    let mut snapshot = use_signal(GalleryState::default);

    // Mirror every view-model transition into the render signal
    let watched = gallery.clone();
    use_future(move || {
        let gallery = watched.clone();
        async move {
            let mut updates = gallery.subscribe();
            snapshot.set(updates.borrow_and_update().clone());
            while updates.changed().await.is_ok() {
                snapshot.set(updates.borrow_and_update().clone());
            }
        }
    });

    // Initial fetch on mount
    let loader = gallery.clone();
    use_future(move || {
        let gallery = loader.clone();
        async move {
            let _ = gallery.refresh().await;
        }
    });

    use_context_provider(|| AppState {
        gallery: gallery.clone(),
        snapshot,
    });

    let refresher = gallery.clone();
    let loading = snapshot.read().loading;

    rsx! {
        div {
            class: "app-container",

            header {
                class: "app-header",
                h1 { "Cloud Gallery" }
                UiButton {
                    variant: ButtonVariant::Outline,
                    disabled: loading,
                    onclick: move |_| {
                        let gallery = refresher.clone();
                        spawn(async move {
                            let _ = gallery.refresh().await;
                        });
                    },
                    if loading { "Refreshing..." } else { "Refresh" }
                }
            }

            UploadBar {}
            GalleryGrid {}
        }
    }
}
