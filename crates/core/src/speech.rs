//! Speech requests. Producing them is pure; playing them is up to whichever
//! speaker the host provides, if any.

use crate::catalog::WordEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    /// Offset from the start of the plan.
    pub delay_ms: u64,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>, rate: f32, pitch: f32) -> Self {
        Self {
            text: text.into(),
            rate,
            pitch,
            delay_ms: 0,
        }
    }

    #[must_use]
    pub fn after(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Letter name, read slowly and a little high.
#[must_use]
pub fn letter_utterance(letter: char) -> Utterance {
    Utterance::new(letter.to_string(), 0.7, 1.2)
}

/// A phonetic label such as `"buh"`.
#[must_use]
pub fn phonetic_utterance(sound: &str) -> Utterance {
    Utterance::new(sound, 0.5, 1.1)
}

/// Each sound of `word` one step apart, then the whole word after a pause.
#[must_use]
pub fn blending_plan(word: &WordEntry, step_ms: u64, tail_ms: u64) -> Vec<Utterance> {
    let mut plan: Vec<Utterance> = word
        .sounds
        .iter()
        .zip(0_u64..)
        .map(|(sound, i)| Utterance::new(sound.to_string(), 0.6, 1.0).after(i * step_ms))
        .collect();
    let sounds = u64::try_from(word.sounds.len()).unwrap_or(u64::MAX);
    plan.push(Utterance::new(word.word, 0.8, 1.0).after(sounds * step_ms + tail_ms));
    plan
}
