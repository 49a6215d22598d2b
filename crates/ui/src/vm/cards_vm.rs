use phonics_core::catalog::{ALPHABET, CVC_WORDS, LetterEntry, WordEntry};

/// Colour used for word-card glyphs and highlights.
pub const WORD_COLOR: &str = "#E74C3C";

/// A card in the Letters A-Z grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterCardVm {
    pub letter: char,
    pub color: &'static str,
    pub aria_label: String,
    pub spoken: String,
    pub example: &'static str,
    pub audio_label: String,
}

impl From<&LetterEntry> for LetterCardVm {
    fn from(entry: &LetterEntry) -> Self {
        Self {
            letter: entry.letter,
            color: entry.color,
            aria_label: format!("Letter {}, example: {}", entry.letter, entry.example),
            spoken: format!("\"{}\"", entry.letter),
            example: entry.example,
            audio_label: format!("Play sound for letter {}", entry.letter),
        }
    }
}

/// A card in the Letter Sounds grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundCardVm {
    pub letter: char,
    pub color: &'static str,
    pub sound: &'static str,
    pub aria_label: String,
    pub sound_label: String,
    pub example: String,
    pub audio_label: String,
}

impl From<&LetterEntry> for SoundCardVm {
    fn from(entry: &LetterEntry) -> Self {
        Self {
            letter: entry.letter,
            color: entry.color,
            sound: entry.sound,
            aria_label: format!("Letter {} makes the {} sound", entry.letter, entry.sound),
            sound_label: format!("/{}/", entry.sound),
            example: format!("as in {}", entry.example),
            audio_label: format!("Play {} sound", entry.sound),
        }
    }
}

/// A blending practice card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCardVm {
    pub word: &'static str,
    pub meaning: &'static str,
    pub aria_label: String,
    pub sounds_label: String,
    pub audio_label: String,
}

impl From<&WordEntry> for WordCardVm {
    fn from(entry: &WordEntry) -> Self {
        Self {
            word: entry.word,
            meaning: entry.meaning,
            aria_label: format!("Practice blending the word {}", entry.word),
            sounds_label: entry.sounds_label(),
            audio_label: format!("Play blending for {}", entry.word),
        }
    }
}

#[must_use]
pub fn map_letter_cards() -> Vec<LetterCardVm> {
    ALPHABET.iter().map(LetterCardVm::from).collect()
}

#[must_use]
pub fn map_sound_cards() -> Vec<SoundCardVm> {
    ALPHABET.iter().map(SoundCardVm::from).collect()
}

#[must_use]
pub fn map_word_cards() -> Vec<WordCardVm> {
    CVC_WORDS.iter().map(WordCardVm::from).collect()
}

/// Inline style for a card: its border colour, plus the lift while highlighted.
#[must_use]
pub fn card_style(color: &str, highlighted: bool, scale: f32) -> String {
    if highlighted {
        format!("border-color: {color}; transform: scale({scale}); box-shadow: 0 8px 24px {color}40;")
    } else {
        format!("border-color: {color};")
    }
}
