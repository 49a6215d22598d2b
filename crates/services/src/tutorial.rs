use std::sync::Arc;

use phonics_core::announcer::Announcer;
use phonics_core::catalog::validate_catalog;
use phonics_core::games::{LetterMatch, RhymeMatch, SoundDetective};
use phonics_core::quiz::QuizEngine;
use phonics_core::{Clock, TutorialSettings};

use crate::audio::AudioService;
use crate::error::TutorialError;
use crate::games::GameFlowService;
use crate::quiz::QuizFlowService;
use crate::speech::{Speaker, SpeechService};

/// Assembles the tutorial-facing services and hands out fresh game state.
#[derive(Clone)]
pub struct TutorialServices {
    settings: TutorialSettings,
    clock: Clock,
    quiz: Arc<QuizFlowService>,
    games: Arc<GameFlowService>,
    audio: Arc<AudioService>,
}

impl TutorialServices {
    /// # Errors
    ///
    /// Returns `TutorialError` if the settings or the built-in catalog are invalid.
    pub fn new(
        settings: TutorialSettings,
        clock: Clock,
        speaker: Arc<dyn Speaker>,
    ) -> Result<Self, TutorialError> {
        let settings = settings.validate()?;
        validate_catalog()?;

        let speech = SpeechService::new(speaker, settings.speech_enabled());
        tracing::info!(speech = speech.is_active(), "tutorial services ready");
        let audio = AudioService::new(clock, settings, speech);
        let games = GameFlowService::new(clock, audio.clone());

        Ok(Self {
            settings,
            clock,
            quiz: Arc::new(QuizFlowService::new(clock)),
            games: Arc::new(games),
            audio: Arc::new(audio),
        })
    }

    /// Silent services on the fixed test clock.
    #[must_use]
    pub fn for_tests() -> Self {
        let settings = TutorialSettings::default().with_speech(false);
        let clock = phonics_core::time::fixed_clock();
        let audio = AudioService::new(clock, settings, SpeechService::disabled());
        Self {
            settings,
            clock,
            quiz: Arc::new(QuizFlowService::new(clock)),
            games: Arc::new(GameFlowService::new(clock, audio.clone())),
            audio: Arc::new(audio),
        }
    }

    #[must_use]
    pub fn settings(&self) -> TutorialSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn games(&self) -> Arc<GameFlowService> {
        Arc::clone(&self.games)
    }

    #[must_use]
    pub fn audio(&self) -> Arc<AudioService> {
        Arc::clone(&self.audio)
    }

    #[must_use]
    pub fn new_announcer(&self) -> Announcer {
        Announcer::new(self.settings.announcement())
    }

    #[must_use]
    pub fn new_quiz(&self) -> QuizEngine {
        QuizEngine::standard()
    }

    #[must_use]
    pub fn new_letter_match(&self) -> LetterMatch {
        LetterMatch::new(self.settings.letter_match_reset())
    }

    #[must_use]
    pub fn new_rhyme_match(&self) -> RhymeMatch {
        RhymeMatch::new(self.settings.rhyme_clear())
    }

    #[must_use]
    pub fn new_detective(&self) -> SoundDetective {
        SoundDetective::new()
    }
}
