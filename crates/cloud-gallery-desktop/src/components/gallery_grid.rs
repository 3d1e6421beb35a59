//! Gallery grid component

use dioxus::prelude::*;

use super::FileTile;
use crate::state::AppState;

/// One tile per file in the last list response
#[component]
pub fn GalleryGrid() -> Element {
    let state = use_context::<AppState>();
    let snapshot = state.snapshot.read();
    let cards = snapshot.cards();
    let busy = snapshot.mutation.is_some();
    let loading = snapshot.loading;
    drop(snapshot);

    rsx! {
        if cards.is_empty() {
            div {
                class: "gallery-empty",
                if loading { "Loading files..." } else { "No files yet" }
            }
        } else {
            div {
                class: "gallery",
                for card in cards {
                    FileTile {
                        key: "{card.id}",
                        card: card.clone(),
                        busy,
                    }
                }
            }
        }
    }
}
