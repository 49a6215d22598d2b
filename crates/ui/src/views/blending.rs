use dioxus::prelude::*;
use phonics_core::sections::Section;

use super::feedback::FeedbackState;
use super::grid::{CardGrid, is_activation_key, use_card_grid};
use crate::context::AppContext;
use crate::vm::{WORD_COLOR, WordCardVm, card_style, map_word_cards};

pub(crate) const BLENDING_GRID_ID: &str = "blending-words";

const WORD_LIFT: f32 = 1.05;

#[component]
pub fn BlendingView() -> Element {
    let section = Section::Blending;
    let cards = use_hook(map_word_cards);
    let grid = use_card_grid(BLENDING_GRID_ID, cards.len());

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            p { "Say each sound, then push them together to read the word." }
            div { id: BLENDING_GRID_ID, class: "letter-grid blending-words",
                for (index, card) in cards.iter().enumerate() {
                    WordCard { key: "{card.word}", index, card: card.clone(), grid }
                }
            }
        }
    }
}

#[component]
fn WordCard(index: usize, card: WordCardVm, grid: CardGrid) -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let lift_for = ctx.settings().word_highlight();
    let word = card.word;
    let activate = use_callback(move |()| {
        grid.highlight(index, lift_for);
        feedback.play_blending(ctx.audio(), word);
    });
    let style = card_style(WORD_COLOR, grid.is_highlighted(index), WORD_LIFT);

    rsx! {
        div {
            class: "letter-card word-card",
            role: "button",
            tabindex: "0",
            "data-index": "{index}",
            aria_label: "{card.aria_label}",
            style: "{style}",
            onclick: move |_| activate.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if is_activation_key(&evt) {
                    evt.prevent_default();
                    activate.call(());
                } else {
                    grid.on_key(index, &evt);
                }
            },
            div { class: "meaning", "{card.meaning}" }
            div { class: "letter", style: "color: {WORD_COLOR}", "{card.word}" }
            div { class: "sound", "{card.sounds_label}" }
            button {
                class: "audio-btn",
                aria_label: "{card.audio_label}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    activate.call(());
                },
                "🔊"
            }
        }
    }
}
