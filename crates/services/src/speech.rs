use std::sync::{Arc, Mutex, PoisonError};

use phonics_core::speech::Utterance;
use tokio::time::{Duration, Instant, sleep_until};

/// Platform speech output. Fire-and-forget: speaking never reports failure.
pub trait Speaker: Send + Sync {
    /// `false` when the host has no speech synthesis at all.
    fn is_available(&self) -> bool;
    fn speak(&self, utterance: &Utterance);
}

/// Used when speech is switched off or unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeech;

impl Speaker for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _utterance: &Utterance) {}
}

/// Keeps every utterance it is asked to speak. Handy in tests and previews.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<Utterance>>,
}

impl RecordingSpeaker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Speaker for RecordingSpeaker {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance) {
        self.spoken
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(utterance.clone());
    }
}

/// Plays speech plans through the configured speaker, honoring each
/// utterance's delay.
#[derive(Clone)]
pub struct SpeechService {
    speaker: Arc<dyn Speaker>,
    enabled: bool,
}

impl SpeechService {
    #[must_use]
    pub fn new(speaker: Arc<dyn Speaker>, enabled: bool) -> Self {
        Self { speaker, enabled }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoSpeech), false)
    }

    /// Whether plans will actually be spoken.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.speaker.is_available()
    }

    /// Speaks `plan` in delay order. Returns once the last utterance is queued.
    pub async fn play(&self, mut plan: Vec<Utterance>) {
        if !self.is_active() || plan.is_empty() {
            return;
        }
        plan.sort_by_key(|utterance| utterance.delay_ms);
        let start = Instant::now();
        for utterance in plan {
            sleep_until(start + Duration::from_millis(utterance.delay_ms)).await;
            tracing::trace!(text = %utterance.text, "speak");
            self.speaker.speak(&utterance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonics_core::speech::letter_utterance;

    #[tokio::test]
    async fn plays_plan_in_delay_order() {
        let speaker = Arc::new(RecordingSpeaker::new());
        let service = SpeechService::new(speaker.clone(), true);
        service
            .play(vec![
                Utterance::new("late", 1.0, 1.0).after(5),
                Utterance::new("early", 1.0, 1.0),
            ])
            .await;

        let texts: Vec<String> = speaker.spoken().into_iter().map(|u| u.text).collect();
        assert_eq!(texts, vec!["early".to_string(), "late".to_string()]);
    }

    #[tokio::test]
    async fn disabled_service_stays_silent() {
        let speaker = Arc::new(RecordingSpeaker::new());
        let service = SpeechService::new(speaker.clone(), false);
        service.play(vec![letter_utterance('A')]).await;
        assert!(speaker.spoken().is_empty());
        assert!(!SpeechService::disabled().is_active());
    }
}
