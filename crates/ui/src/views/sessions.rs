use dioxus::prelude::*;
use phonics_core::games::{LetterMatch, RhymeMatch, SoundDetective};
use phonics_core::quiz::QuizEngine;

use crate::context::AppContext;

/// Quiz and mini-game state for the whole page.
///
/// Owned above the router so switching sections never drops a running quiz,
/// held letter match selections or detective marks.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub quiz: Signal<QuizEngine>,
    pub letter_match: Signal<LetterMatch>,
    pub detective: Signal<SoundDetective>,
    pub rhyme: Signal<RhymeMatch>,
}

/// Creates the session state for this tree and provides it as context.
pub fn use_session_provider() -> SessionState {
    let ctx = use_context::<AppContext>();
    let tutorial = ctx.tutorial();
    let quiz = use_signal(|| tutorial.new_quiz());
    let letter_match = use_signal(|| tutorial.new_letter_match());
    let detective = use_signal(|| tutorial.new_detective());
    let rhyme = use_signal(|| tutorial.new_rhyme_match());
    use_context_provider(|| SessionState {
        quiz,
        letter_match,
        detective,
        rhyme,
    })
}
