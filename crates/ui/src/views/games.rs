use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use phonics_core::games::LetterCase;
use phonics_core::sections::Section;

use super::feedback::{FeedbackState, to_std};
use super::sessions::SessionState;
use crate::context::AppContext;
use crate::vm::{map_detective, map_letter_match, map_rhyme};

#[component]
pub fn GamesView() -> Element {
    let section = Section::Games;

    rsx! {
        section { id: section.id(), class: "content-section active",
            h2 { "{section.title()}" }
            div { class: "game-container", id: "letter-match-game",
                h4 { "Letter Match" }
                LetterMatchGame {}
            }
            div { class: "game-container", id: "sound-detective-game",
                h4 { "Sound Detective" }
                SoundDetectiveGame {}
            }
            div { class: "game-container", id: "rhyme-game",
                h4 { "Rhyme Time" }
                RhymeGame {}
            }
        }
    }
}

#[component]
fn LetterMatchGame() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let mut game = use_context::<SessionState>().letter_match;
    let reset_after = to_std(ctx.settings().letter_match_reset());

    let select = use_callback(move |(case, letter): (LetterCase, char)| {
        let mut live = feedback.live;
        let mut toast = feedback.toast;
        let step = ctx.games().select_letter(
            &mut game.write(),
            case,
            letter,
            &mut live.write(),
            &mut toast.write(),
        );
        match step {
            Ok(Some(step)) => {
                if let Some(cue) = step.cue {
                    feedback.play(cue, ctx.audio());
                }
                let ticket = step.resolution.ticket;
                spawn_forever(async move {
                    tokio::time::sleep(reset_after).await;
                    game.write().expire(ticket);
                });
            }
            Ok(None) => {}
            Err(err) => tracing::debug!(error = %err, "letter match selection ignored"),
        }
    });

    let vm = map_letter_match(&game.read());

    rsx! {
        div { class: "letter-match",
            div { class: "letter-match__column",
                h5 { "Uppercase" }
                div { id: "uppercase-letters", class: "letter-match__choices",
                    for choice in vm.uppercase {
                        button {
                            key: "{choice.letter}",
                            class: "{choice.class}",
                            "data-letter": "{choice.letter}",
                            onclick: move |_| select.call((LetterCase::Upper, choice.letter)),
                            "{choice.letter}"
                        }
                    }
                }
            }
            div { class: "letter-match__column",
                h5 { "Match!" }
                div { id: "match-feedback", class: "{vm.feedback_class}", "{vm.feedback}" }
            }
            div { class: "letter-match__column",
                h5 { "Lowercase" }
                div { id: "lowercase-letters", class: "letter-match__choices",
                    for choice in vm.lowercase {
                        button {
                            key: "{choice.letter}",
                            class: "{choice.class}",
                            "data-letter": "{choice.letter}",
                            onclick: move |_| select.call((LetterCase::Lower, choice.letter)),
                            "{choice.letter}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SoundDetectiveGame() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback = use_context::<FeedbackState>();
    let mut game = use_context::<SessionState>().detective;

    let play = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let mut live = feedback.live;
            let mut toast = feedback.toast;
            let cue = ctx.games().play_detective(
                &mut game.write(),
                &mut rand::rng(),
                &mut live.write(),
                &mut toast.write(),
            );
            feedback.play(cue, ctx.audio());
        })
    };
    let check = use_callback(move |letter: char| {
        if let Err(err) = ctx.games().check_detective(&mut game.write(), letter) {
            tracing::debug!(error = %err, "detective guess ignored");
        }
    });

    let vm = map_detective(&game.read());

    rsx! {
        div { class: "sound-detective",
            button { class: "nav-btn detective-play", onclick: move |_| play.call(()), "🔊 Play Sound" }
            div { id: "detective-options", class: "game-options",
                for choice in vm.options {
                    button {
                        key: "{choice.letter}",
                        class: "{choice.class}",
                        "data-letter": "{choice.letter}",
                        onclick: move |_| check.call(choice.letter),
                        "{choice.letter}"
                    }
                }
            }
            div { id: "detective-feedback", class: "{vm.feedback_class}", "{vm.feedback}" }
        }
    }
}

#[component]
fn RhymeGame() -> Element {
    let ctx = use_context::<AppContext>();
    let mut game = use_context::<SessionState>().rhyme;
    let clear_after = to_std(ctx.settings().rhyme_clear());

    let choose = use_callback(move |index: usize| {
        let chosen = ctx.games().choose_rhyme(&mut game.write(), index);
        match chosen {
            Ok(resolution) => {
                let ticket = resolution.ticket;
                spawn_forever(async move {
                    tokio::time::sleep(clear_after).await;
                    game.write().expire(ticket);
                });
            }
            Err(err) => tracing::debug!(error = %err, "rhyme choice ignored"),
        }
    });

    let vm = map_rhyme(&game.read());

    rsx! {
        div { class: "rhyme-match",
            p { class: "rhyme-prompt",
                "Find words that rhyme with: "
                strong { id: "rhyme-target", "{vm.target}" }
            }
            div { id: "rhyme-options", class: "game-options",
                for choice in vm.options {
                    button {
                        key: "{choice.word}",
                        class: "{choice.class}",
                        onclick: move |_| choose.call(choice.index),
                        "{choice.word}"
                    }
                }
            }
            div { id: "rhyme-feedback", class: "{vm.feedback_class}", "{vm.feedback}" }
        }
    }
}
