use serde::Serialize;

/// A consonant-vowel-consonant word used for blending practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: &'static str,
    pub sounds: [char; 3],
    /// Picture glyph shown above the word.
    pub meaning: &'static str,
}

impl WordEntry {
    /// `true` when the sounds, read in order, reconstruct the word.
    #[must_use]
    pub fn sounds_spell_word(&self) -> bool {
        self.sounds.iter().collect::<String>() == self.word
    }

    /// `"C + A + T"`
    #[must_use]
    pub fn sounds_label(&self) -> String {
        self.sounds
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

pub const CVC_WORDS: [WordEntry; 8] = [
    WordEntry { word: "CAT", sounds: ['C', 'A', 'T'], meaning: "🐱" },
    WordEntry { word: "DOG", sounds: ['D', 'O', 'G'], meaning: "🐶" },
    WordEntry { word: "SUN", sounds: ['S', 'U', 'N'], meaning: "☀️" },
    WordEntry { word: "BAT", sounds: ['B', 'A', 'T'], meaning: "🦇" },
    WordEntry { word: "HAT", sounds: ['H', 'A', 'T'], meaning: "👒" },
    WordEntry { word: "PIG", sounds: ['P', 'I', 'G'], meaning: "🐷" },
    WordEntry { word: "BUG", sounds: ['B', 'U', 'G'], meaning: "🐛" },
    WordEntry { word: "CUP", sounds: ['C', 'U', 'P'], meaning: "☕" },
];

#[must_use]
pub fn word(text: &str) -> Option<&'static WordEntry> {
    CVC_WORDS
        .iter()
        .find(|entry| entry.word.eq_ignore_ascii_case(text))
}
