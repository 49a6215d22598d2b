use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

/// Timing and audio knobs for the tutorial. Durations are stored in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialSettings {
    announcement_ms: u64,
    toast_ms: u64,
    letter_match_reset_ms: u64,
    rhyme_clear_ms: u64,
    letter_highlight_ms: u64,
    word_highlight_ms: u64,
    blend_step_ms: u64,
    blend_tail_ms: u64,
    speech_enabled: bool,
}

impl Default for TutorialSettings {
    fn default() -> Self {
        Self {
            announcement_ms: 1_000,
            toast_ms: 2_000,
            letter_match_reset_ms: 2_000,
            rhyme_clear_ms: 3_000,
            letter_highlight_ms: 1_000,
            word_highlight_ms: 1_500,
            blend_step_ms: 800,
            blend_tail_ms: 500,
            speech_enabled: true,
        }
    }
}

fn millis(value: u64) -> Duration {
    Duration::milliseconds(i64::try_from(value).unwrap_or(i64::MAX))
}

impl TutorialSettings {
    /// Rejects settings that would make feedback vanish before it is seen.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroDuration` naming the first zero field.
    pub fn validate(self) -> Result<Self, SettingsError> {
        let fields = [
            ("announcement_ms", self.announcement_ms),
            ("toast_ms", self.toast_ms),
            ("letter_match_reset_ms", self.letter_match_reset_ms),
            ("rhyme_clear_ms", self.rhyme_clear_ms),
            ("letter_highlight_ms", self.letter_highlight_ms),
            ("word_highlight_ms", self.word_highlight_ms),
            ("blend_step_ms", self.blend_step_ms),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(SettingsError::ZeroDuration { field });
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_speech(mut self, enabled: bool) -> Self {
        self.speech_enabled = enabled;
        self
    }

    #[must_use]
    pub fn speech_enabled(&self) -> bool {
        self.speech_enabled
    }

    /// How long a live-region announcement stays in the document.
    #[must_use]
    pub fn announcement(&self) -> Duration {
        millis(self.announcement_ms)
    }

    #[must_use]
    pub fn toast(&self) -> Duration {
        millis(self.toast_ms)
    }

    #[must_use]
    pub fn letter_match_reset(&self) -> Duration {
        millis(self.letter_match_reset_ms)
    }

    #[must_use]
    pub fn rhyme_clear(&self) -> Duration {
        millis(self.rhyme_clear_ms)
    }

    #[must_use]
    pub fn letter_highlight(&self) -> Duration {
        millis(self.letter_highlight_ms)
    }

    #[must_use]
    pub fn word_highlight(&self) -> Duration {
        millis(self.word_highlight_ms)
    }

    #[must_use]
    pub fn blend_step_ms(&self) -> u64 {
        self.blend_step_ms
    }

    #[must_use]
    pub fn blend_tail_ms(&self) -> u64 {
        self.blend_tail_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = TutorialSettings::default().validate().unwrap();
        assert_eq!(settings.rhyme_clear(), Duration::seconds(3));
        assert_eq!(settings.letter_match_reset(), Duration::seconds(2));
        assert!(settings.speech_enabled());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: TutorialSettings =
            serde_json::from_str(r#"{ "toast_ms": 4000, "speech_enabled": false }"#).unwrap();
        assert_eq!(settings.toast(), Duration::seconds(4));
        assert_eq!(settings.announcement(), Duration::seconds(1));
        assert!(!settings.speech_enabled());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let settings: TutorialSettings =
            serde_json::from_str(r#"{ "rhyme_clear_ms": 0 }"#).unwrap();
        assert_eq!(
            settings.validate().unwrap_err(),
            SettingsError::ZeroDuration {
                field: "rhyme_clear_ms"
            }
        );
    }
}
