use phonics_core::Clock;
use phonics_core::announcer::{AnnouncementId, Announcer};
use phonics_core::quiz::{AdvanceOutcome, AnswerOutcome, QuizEngine};

use crate::error::TutorialError;

/// A scored answer and the announcement that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswer {
    pub outcome: AnswerOutcome,
    pub announcement: AnnouncementId,
}

/// Where `next` landed; completion carries the tier announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAdvance {
    pub outcome: AdvanceOutcome,
    pub announcement: Option<AnnouncementId>,
    pub progress: u32,
}

/// Drives a `QuizEngine` and reports each step to the live region.
#[derive(Debug, Clone, Copy)]
pub struct QuizFlowService {
    clock: Clock,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Starts (or starts again) and returns the progress value to show.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError` if a session is already running.
    pub fn start(&self, engine: &mut QuizEngine) -> Result<u32, TutorialError> {
        engine.start().inspect_err(|err| {
            tracing::warn!(error = %err, "quiz start rejected");
        })?;
        tracing::info!(total = engine.total(), "quiz started");
        Ok(engine.progress_percent())
    }

    /// # Errors
    ///
    /// Returns `TutorialError` when no question is waiting or the option is invalid.
    pub fn answer(
        &self,
        engine: &mut QuizEngine,
        live: &mut Announcer,
        selected: usize,
    ) -> Result<QuizAnswer, TutorialError> {
        let outcome = engine.submit_answer(selected).inspect_err(|err| {
            tracing::warn!(error = %err, selected, "answer rejected");
        })?;
        tracing::debug!(
            question = outcome.index,
            selected,
            correct = outcome.is_correct,
            score = outcome.score,
            "answer scored"
        );
        let announcement = live.announce(outcome.announcement(), self.clock.now());
        Ok(QuizAnswer {
            outcome,
            announcement,
        })
    }

    /// # Errors
    ///
    /// Returns `TutorialError` when the current question is unanswered.
    pub fn next(
        &self,
        engine: &mut QuizEngine,
        live: &mut Announcer,
    ) -> Result<QuizAdvance, TutorialError> {
        let outcome = engine.advance().inspect_err(|err| {
            tracing::warn!(error = %err, "advance rejected");
        })?;
        let announcement = match outcome {
            AdvanceOutcome::Next { .. } => None,
            AdvanceOutcome::Completed(result) => {
                tracing::info!(
                    score = result.score,
                    total = result.total,
                    percentage = result.percentage,
                    tier = result.tier.label(),
                    "quiz completed"
                );
                Some(live.announce(result.tier.message(), self.clock.now()))
            }
        };
        Ok(QuizAdvance {
            outcome,
            announcement,
            progress: engine.progress_percent(),
        })
    }

    /// Back to the start screen. Returns the progress value (always 0).
    pub fn restart(&self, engine: &mut QuizEngine) -> u32 {
        engine.restart();
        tracing::debug!("quiz restarted");
        engine.progress_percent()
    }
}
