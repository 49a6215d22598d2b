use dioxus::prelude::*;
use phonics_core::sections::Section;

use super::feedback::FeedbackState;
use super::grid::{CardGrid, is_activation_key, use_card_grid};
use crate::context::AppContext;
use crate::vm::{LetterCardVm, SoundCardVm, card_style, map_letter_cards, map_sound_cards};

pub(crate) const LETTER_GRID_ID: &str = "letter-grid";
pub(crate) const SOUNDS_GRID_ID: &str = "sounds-grid";

const CARD_LIFT: f32 = 1.1;

#[component]
pub fn LettersView() -> Element {
    let section = Section::Letters;
    let cards = use_hook(map_letter_cards);
    let grid = use_card_grid(LETTER_GRID_ID, cards.len());

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            p { "Choose a letter to hear its name." }
            div { id: LETTER_GRID_ID, class: "letter-grid",
                for (index, card) in cards.iter().enumerate() {
                    LetterCard { key: "{card.letter}", index, card: card.clone(), grid }
                }
            }
        }
    }
}

#[component]
fn LetterCard(index: usize, card: LetterCardVm, grid: CardGrid) -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let lift_for = ctx.settings().letter_highlight();
    let letter = card.letter;
    let activate = use_callback(move |()| {
        grid.highlight(index, lift_for);
        feedback.play_letter(ctx.audio(), letter);
    });
    let style = card_style(card.color, grid.is_highlighted(index), CARD_LIFT);

    rsx! {
        div {
            class: "letter-card",
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
            div { class: "letter", style: "color: {card.color}", "{card.letter}" }
            div { class: "sound", "{card.spoken}" }
            div { class: "example", "{card.example}" }
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

#[component]
pub fn SoundsView() -> Element {
    let section = Section::Sounds;
    let cards = use_hook(map_sound_cards);
    let grid = use_card_grid(SOUNDS_GRID_ID, cards.len());

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            p { "Every letter has a sound. Play each one and say it out loud." }
            div { id: SOUNDS_GRID_ID, class: "letter-grid",
                for (index, card) in cards.iter().enumerate() {
                    SoundCard { key: "{card.letter}", index, card: card.clone(), grid }
                }
            }
        }
    }
}

#[component]
fn SoundCard(index: usize, card: SoundCardVm, grid: CardGrid) -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let lift_for = ctx.settings().letter_highlight();
    let sound = card.sound;
    let activate = use_callback(move |()| {
        grid.highlight(index, lift_for);
        feedback.play_phonetic(ctx.audio(), sound);
    });
    let style = card_style(card.color, grid.is_highlighted(index), CARD_LIFT);

    rsx! {
        div {
            class: "letter-card",
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
            div { class: "letter", style: "color: {card.color}", "{card.letter}" }
            div { class: "sound", "{card.sound_label}" }
            div { class: "example", "{card.example}" }
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
