//! Static tutorial content: the alphabet, CVC blending words, quiz questions and
//! the rhyme game's word list. Everything here is immutable and loaded once.

mod letters;
mod questions;
mod rhymes;
mod words;

use std::collections::HashSet;

use thiserror::Error;

pub use letters::{ALPHABET, LetterEntry, letter};
pub use questions::{OPTION_COUNT, QUIZ_QUESTIONS, QuizQuestion};
pub use rhymes::{RHYME_OPTIONS, RHYME_TARGET, RhymeOption};
pub use words::{CVC_WORDS, WordEntry, word};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("letter {0:?} appears more than once")]
    DuplicateLetter(char),

    #[error("sounds of {word:?} do not spell the word")]
    SoundsMismatch { word: &'static str },

    #[error("question {index} has correct index {correct} out of range")]
    CorrectIndexOutOfRange { index: usize, correct: usize },
}

/// Checks the invariants the static tables promise.
///
/// # Errors
///
/// Returns the first `CatalogError` found.
pub fn validate_catalog() -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for entry in &ALPHABET {
        if !seen.insert(entry.letter) {
            return Err(CatalogError::DuplicateLetter(entry.letter));
        }
    }

    for entry in &CVC_WORDS {
        if !entry.sounds_spell_word() {
            return Err(CatalogError::SoundsMismatch { word: entry.word });
        }
    }

    for (index, question) in QUIZ_QUESTIONS.iter().enumerate() {
        if question.correct_index >= OPTION_COUNT {
            return Err(CatalogError::CorrectIndexOutOfRange {
                index,
                correct: question.correct_index,
            });
        }
    }

    Ok(())
}
