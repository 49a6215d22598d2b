use phonics_core::Clock;
use phonics_core::announcer::Announcer;
use phonics_core::feedback::FeedbackSlot;
use phonics_core::games::{
    DetectiveOutcome, LetterCase, LetterMatch, MatchOutcome, MatchResolution, RhymeMatch,
    RhymeResolution, SoundDetective,
};
use rand::Rng;

use crate::audio::{AudioCue, AudioService};
use crate::error::TutorialError;

/// A resolved letter pair; a match also plays the letter.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterMatchStep {
    pub resolution: MatchResolution,
    pub cue: Option<AudioCue>,
}

/// Runs the mini-games against the shared live region and toast.
#[derive(Clone)]
pub struct GameFlowService {
    clock: Clock,
    audio: AudioService,
}

impl GameFlowService {
    #[must_use]
    pub fn new(clock: Clock, audio: AudioService) -> Self {
        Self { clock, audio }
    }

    /// Returns `None` while only one side has been chosen.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError` if the letter is not on the board.
    pub fn select_letter(
        &self,
        game: &mut LetterMatch,
        case: LetterCase,
        letter: char,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> Result<Option<LetterMatchStep>, TutorialError> {
        let Some(resolution) = game.select(case, letter, self.clock.now())? else {
            return Ok(None);
        };
        tracing::debug!(outcome = ?resolution.outcome, "letter match resolved");
        let cue = match resolution.outcome {
            MatchOutcome::Match { letter } => Some(self.audio.play_letter(letter, live, toast)),
            MatchOutcome::Mismatch { .. } => None,
        };
        Ok(Some(LetterMatchStep { resolution, cue }))
    }

    /// Picks the next hidden letter and plays it.
    pub fn play_detective<R: Rng + ?Sized>(
        &self,
        game: &mut SoundDetective,
        rng: &mut R,
        live: &mut Announcer,
        toast: &mut FeedbackSlot<String>,
    ) -> AudioCue {
        let letter = game.play_sound(rng);
        self.audio.play_letter(letter, live, toast)
    }

    /// # Errors
    ///
    /// Returns `TutorialError` for letters that are not options.
    pub fn check_detective(
        &self,
        game: &mut SoundDetective,
        letter: char,
    ) -> Result<DetectiveOutcome, TutorialError> {
        let outcome = game.check(letter)?;
        tracing::debug!(?outcome, "sound detective guess");
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `TutorialError` for an unknown option.
    pub fn choose_rhyme(
        &self,
        game: &mut RhymeMatch,
        index: usize,
    ) -> Result<RhymeResolution, TutorialError> {
        let resolution = game.choose(index, self.clock.now())?;
        tracing::debug!(
            word = resolution.outcome.word,
            correct = resolution.outcome.correct,
            "rhyme chosen"
        );
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;
    use phonics_core::TutorialSettings;
    use phonics_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::speech::{RecordingSpeaker, SpeechService};

    fn flow() -> GameFlowService {
        let speech = SpeechService::new(Arc::new(RecordingSpeaker::new()), true);
        let audio = AudioService::new(fixed_clock(), TutorialSettings::default(), speech);
        GameFlowService::new(fixed_clock(), audio)
    }

    #[test]
    fn match_plays_the_letter_and_mismatch_does_not() {
        let flow = flow();
        let mut game = LetterMatch::new(Duration::seconds(2));
        let mut live = Announcer::default();
        let mut toast = FeedbackSlot::new();

        assert!(flow
            .select_letter(&mut game, LetterCase::Upper, 'A', &mut live, &mut toast)
            .unwrap()
            .is_none());
        let step = flow
            .select_letter(&mut game, LetterCase::Lower, 'a', &mut live, &mut toast)
            .unwrap()
            .unwrap();
        assert!(step.resolution.outcome.is_match());
        assert!(step.cue.is_some());
        assert_eq!(live.latest().map(|a| a.message.as_str()), Some("Letter A"));

        let step = flow
            .select_letter(&mut game, LetterCase::Lower, 'b', &mut live, &mut toast)
            .unwrap()
            .unwrap();
        assert!(step.cue.is_none());
    }

    #[test]
    fn detective_round_trip() {
        let flow = flow();
        let mut game = SoundDetective::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut live = Announcer::default();
        let mut toast = FeedbackSlot::new();

        let cue = flow.play_detective(&mut game, &mut rng, &mut live, &mut toast);
        let current = game.current();
        assert_eq!(cue.plan[0].text, current.to_string());
        let outcome = flow.check_detective(&mut game, current).unwrap();
        assert!(outcome.is_correct());
        assert!(flow.check_detective(&mut game, 'Z').is_err());
    }

    #[test]
    fn rhyme_errors_are_wrapped() {
        let flow = flow();
        let mut game = RhymeMatch::new(Duration::seconds(3));
        assert!(flow.choose_rhyme(&mut game, 0).unwrap().outcome.correct);
        assert!(flow.choose_rhyme(&mut game, 10).is_err());
    }
}
