//! Shared UI primitives and the base stylesheet.

use dioxus::prelude::*;

/// Layout plus button and toast styles.
pub const APP_STYLES: &str = r"
body { margin: 0; font-family: system-ui, -apple-system, sans-serif; }
.app-container { padding: 16px 24px; }
.app-header { display: flex; align-items: center; justify-content: space-between; }
.upload-bar { display: flex; gap: 8px; align-items: center; margin: 12px 0 20px; }
.upload-bar__selection { color: #4b5563; font-size: 13px; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; }
.gallery-empty { color: #6b7280; padding: 24px; text-align: center; }
.gallery-error { color: #b91c1c; padding: 24px; }
.file-card { border: 1px solid #e5e7eb; border-radius: 10px; padding: 12px; display: flex; flex-direction: column; gap: 8px; }
.file-card__name { font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.file-card__actions { display: flex; gap: 6px; }

.ui-button {
    border-radius: 8px;
    padding: 6px 10px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
}
.ui-button:disabled { opacity: 0.55; cursor: default; }
.ui-button--primary { background: #2563eb; color: #ffffff; border-color: #2563eb; }
.ui-button--outline { background: #ffffff; color: #374151; border-color: #d1d5db; }
.ui-button--danger { background: #dc2626; color: #ffffff; border-color: #dc2626; }

.toast-container { position: fixed; inset: auto 12px 12px auto; z-index: 9999; pointer-events: none; }
.toast-list { margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 8px; }
.toast { pointer-events: auto; border-radius: 10px; border: 1px solid #d1d5db; background: #ffffff; padding: 10px 12px; display: flex; gap: 10px; }
.toast[data-type='success'] { border-color: #10b981; }
.toast[data-type='error'] { border-color: #ef4444; }
.toast[data-type='warning'] { border-color: #f59e0b; }
.toast-title { font-size: 13px; font-weight: 700; }
.toast-description { font-size: 12px; color: #4b5563; margin-top: 2px; }
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class_name = format!("ui-button {}", variant.class());

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}
