use phonics_core::Clock;
use phonics_core::TutorialSettings;
use phonics_core::announcer::{AnnouncementId, Announcer};
use phonics_core::catalog::word;
use phonics_core::feedback::{FeedbackSlot, Ticket};
use phonics_core::speech::{Utterance, blending_plan, letter_utterance, phonetic_utterance};

use crate::speech::SpeechService;

/// Everything one "play" produced: the live-region entry, the toast ticket and
/// the speech to hand to `SpeechService::play`.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    pub announcement: AnnouncementId,
    pub toast: Ticket,
    pub plan: Vec<Utterance>,
}

/// Audio feedback: announcement, on-screen toast and optional speech.
#[derive(Clone)]
pub struct AudioService {
    clock: Clock,
    settings: TutorialSettings,
    speech: SpeechService,
}

impl AudioService {
    #[must_use]
    pub fn new(clock: Clock, settings: TutorialSettings, speech: SpeechService) -> Self {
        Self {
            clock,
            settings,
            speech,
        }
    }

    #[must_use]
    pub fn speech(&self) -> &SpeechService {
        &self.speech
    }

    fn cue(
        &self,
        announcement: String,
        toast_text: String,
        plan: Vec<Utterance>,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> AudioCue {
        let now = self.clock.now();
        let announcement = live.announce(announcement, now);
        let toast = toast.show(toast_text, now + self.settings.toast());
        let plan = if self.speech.is_active() { plan } else { Vec::new() };
        AudioCue {
            announcement,
            toast,
            plan,
        }
    }

    pub fn play_letter(
        &self,
        letter: char,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> AudioCue {
        tracing::debug!(%letter, "play letter");
        self.cue(
            format!("Letter {letter}"),
            format!("Playing: Letter {letter}"),
            vec![letter_utterance(letter)],
            live,
            toast,
        )
    }

    pub fn play_phonetic(
        &self,
        sound: &str,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> AudioCue {
        tracing::debug!(%sound, "play phonetic sound");
        self.cue(
            format!("Sound: {sound}"),
            format!("Playing: /{sound}/ sound"),
            vec![phonetic_utterance(sound)],
            live,
            toast,
        )
    }

    /// Unknown words still get the announcement and toast, just no speech.
    pub fn play_blending(
        &self,
        text: &str,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> AudioCue {
        tracing::debug!(word = %text, "play blending");
        let plan = word(text).map_or_else(Vec::new, |entry| {
            blending_plan(
                entry,
                self.settings.blend_step_ms(),
                self.settings.blend_tail_ms(),
            )
        });
        self.cue(
            format!("Blending word: {text}"),
            format!("Blending: {text}"),
            plan,
            live,
            toast,
        )
    }
}
