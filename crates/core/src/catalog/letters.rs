use serde::Serialize;

/// One letter of the alphabet with its teaching sound and example word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterEntry {
    pub letter: char,
    /// Short spoken label, e.g. `"buh"`.
    pub sound: &'static str,
    /// IPA transcription, e.g. `"/b/"`.
    pub phonetic: &'static str,
    pub example: &'static str,
    /// CSS color used for the card border and glyph.
    pub color: &'static str,
}

impl LetterEntry {
    #[must_use]
    pub fn lowercase(&self) -> char {
        self.letter.to_ascii_lowercase()
    }
}

macro_rules! letter_entry {
    ($letter:literal, $sound:literal, $phonetic:literal, $example:literal, $color:literal) => {
        LetterEntry {
            letter: $letter,
            sound: $sound,
            phonetic: $phonetic,
            example: $example,
            color: $color,
        }
    };
}

pub const ALPHABET: [LetterEntry; 26] = [
    letter_entry!('A', "ay", "/eɪ/", "Apple", "#E74C3C"),
    letter_entry!('B', "buh", "/b/", "Ball", "#3498DB"),
    letter_entry!('C', "kuh", "/k/", "Cat", "#F39C12"),
    letter_entry!('D', "duh", "/d/", "Dog", "#27AE60"),
    letter_entry!('E', "eh", "/ɛ/", "Elephant", "#9B59B6"),
    letter_entry!('F', "fuh", "/f/", "Fish", "#E67E22"),
    letter_entry!('G', "guh", "/g/", "Goat", "#1ABC9C"),
    letter_entry!('H', "huh", "/h/", "Hat", "#E91E63"),
    letter_entry!('I', "ih", "/ɪ/", "Ice", "#2196F3"),
    letter_entry!('J', "juh", "/dʒ/", "Jump", "#FF5722"),
    letter_entry!('K', "kuh", "/k/", "Kite", "#795548"),
    letter_entry!('L', "luh", "/l/", "Lion", "#607D8B"),
    letter_entry!('M', "muh", "/m/", "Mouse", "#FF9800"),
    letter_entry!('N', "nuh", "/n/", "Nose", "#4CAF50"),
    letter_entry!('O', "oh", "/oʊ/", "Orange", "#FF6B35"),
    letter_entry!('P', "puh", "/p/", "Pig", "#8E24AA"),
    letter_entry!('Q', "kwuh", "/kw/", "Queen", "#D32F2F"),
    letter_entry!('R', "ruh", "/r/", "Rabbit", "#1976D2"),
    letter_entry!('S', "sss", "/s/", "Sun", "#F57C00"),
    letter_entry!('T', "tuh", "/t/", "Tiger", "#388E3C"),
    letter_entry!('U', "uh", "/ʌ/", "Umbrella", "#7B1FA2"),
    letter_entry!('V', "vuh", "/v/", "Van", "#C2185B"),
    letter_entry!('W', "wuh", "/w/", "Water", "#0097A7"),
    letter_entry!('X', "ks", "/ks/", "X-ray", "#5D4037"),
    letter_entry!('Y', "yuh", "/j/", "Yellow", "#FBC02D"),
    letter_entry!('Z', "zuh", "/z/", "Zebra", "#455A64"),
];

/// Case-insensitive lookup.
#[must_use]
pub fn letter(ch: char) -> Option<&'static LetterEntry> {
    let upper = ch.to_ascii_uppercase();
    ALPHABET.iter().find(|entry| entry.letter == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(letter('m').map(|e| e.example), Some("Mouse"));
        assert_eq!(letter('M').map(|e| e.sound), Some("muh"));
        assert!(letter('?').is_none());
    }

    #[test]
    fn lowercase_matches_ascii() {
        assert_eq!(ALPHABET[0].lowercase(), 'a');
        assert_eq!(ALPHABET[25].lowercase(), 'z');
    }
}
