//! The three practice mini-games. Each controller owns its own selection state;
//! nothing is shared between games.

mod letter_match;
mod rhyme_match;
mod sound_detective;

use thiserror::Error;

pub use letter_match::{LETTER_MATCH_IDLE_TEXT, LetterCase, LetterMatch, MatchOutcome, MatchResolution};
pub use rhyme_match::{RhymeMatch, RhymeOutcome, RhymeResolution};
pub use sound_detective::{DetectiveOutcome, SoundDetective};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("{0:?} is not one of this game's options")]
    UnknownLetter(char),
    #[error("option {index} is out of range (0..{count})")]
    OptionOutOfRange { index: usize, count: usize },
    #[error("a game needs at least one option")]
    EmptyPool,
}

/// Marking applied to a game button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Selected,
    Correct,
    Incorrect,
}

/// Color family of a feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Failure,
}

/// The two substates every game moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase<O> {
    AwaitingSelection,
    Resolved(O),
}
