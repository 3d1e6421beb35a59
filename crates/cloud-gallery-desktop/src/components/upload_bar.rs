//! File picker and upload trigger

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use cloud_gallery_core::{LocalFile, Notifier};

use super::{ButtonVariant, UiButton};
use crate::state::AppState;

#[component]
pub fn UploadBar() -> Element {
    let state = use_context::<AppState>();
    let uploading = state.snapshot.read().uploading();
    let selected = state.selected_file_name();

    let picker = state.gallery.clone();
    let on_pick = move |_: MouseEvent| {
        let gallery = picker.clone();
        spawn(async move {
            let Some(file) = AsyncFileDialog::new().pick_file().await else {
                return;
            };
            let file_name = file.file_name();
            if file_name.trim().is_empty() {
                gallery
                    .notifier()
                    .warning("Selected file has an empty filename.", None);
                return;
            }
            let bytes = file.read().await;
            gallery.select_file(LocalFile::new(file_name, bytes));
        });
    };

    let uploader = state.gallery.clone();
    let on_upload = move |_: MouseEvent| {
        let gallery = uploader.clone();
        spawn(async move {
            let _ = gallery.upload().await;
        });
    };

    rsx! {
        div {
            class: "upload-bar",

            UiButton {
                variant: ButtonVariant::Outline,
                disabled: uploading,
                onclick: on_pick,
                "Choose file"
            }

            span {
                class: "upload-bar__selection",
                if let Some(name) = selected {
                    "{name}"
                } else {
                    "No file selected"
                }
            }

            UiButton {
                disabled: uploading,
                onclick: on_upload,
                if uploading { "Uploading..." } else { "Upload" }
            }
        }
    }
}
