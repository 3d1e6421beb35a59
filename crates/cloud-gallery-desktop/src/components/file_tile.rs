//! File tile component

use dioxus::prelude::*;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use cloud_gallery_core::{Confirmation, FileCard, Notifier};

use super::{ButtonVariant, UiButton};
use crate::state::AppState;

/// A single stored file with open, download, and delete actions.
#[component]
pub fn FileTile(card: FileCard, busy: bool) -> Element {
    let state = use_context::<AppState>();

    let opener = state.gallery.clone();
    let open_record = card.to_record();
    let on_open = move |_: MouseEvent| {
        if let Ok(url) = opener.open(&open_record) {
            open_in_browser(&url);
        }
    };

    let downloader = state.gallery.clone();
    let download_record = card.to_record();
    let on_download = move |_: MouseEvent| {
        let gallery = downloader.clone();
        let record = download_record.clone();
        spawn(async move {
            let Ok(file) = gallery.download(&record).await else {
                return;
            };
            let Some(handle) = AsyncFileDialog::new()
                .set_file_name(&file.file_name)
                .save_file()
                .await
            else {
                return;
            };
            match handle.write(&file.bytes).await {
                Ok(()) => gallery
                    .notifier()
                    .success("Saved", Some(handle.file_name())),
                Err(error) => {
                    tracing::error!("Failed to save {}: {}", file.file_name, error);
                    gallery
                        .notifier()
                        .error("Could not save file.", Some(error.to_string()));
                }
            }
        });
    };

    let deleter = state.gallery.clone();
    let delete_key = card.id.clone();
    let delete_name = card.display_name.clone();
    let on_delete = move |_: MouseEvent| {
        let gallery = deleter.clone();
        let key = delete_key.clone();
        let name = delete_name.clone();
        spawn(async move {
            let answer = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Delete file")
                .set_description(format!("Delete {name} permanently?"))
                .set_buttons(MessageButtons::YesNo)
                .show()
                .await;
            let confirmation = Confirmation::from(matches!(answer, MessageDialogResult::Yes));
            let _ = gallery.delete(&key, confirmation).await;
        });
    };

    rsx! {
        div {
            class: "file-card",

            div {
                class: "file-card__name",
                title: "{card.id}",
                "{card.display_name}"
            }

            div {
                class: "file-card__actions",

                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: on_open,
                    "Open"
                }
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: on_download,
                    "Download"
                }
                UiButton {
                    variant: ButtonVariant::Danger,
                    disabled: busy,
                    onclick: on_delete,
                    "Delete"
                }
            }
        }
    }
}

/// Hand a view URL to the system browser.
fn open_in_browser(url: &str) {
    let Some(script) = window_open_script(url) else {
        return;
    };
    let _ = document::eval(&script);
}

fn window_open_script(url: &str) -> Option<String> {
    let literal = serde_json::to_string(url).ok()?;
    Some(format!("window.open({literal}, '_blank');"))
}
