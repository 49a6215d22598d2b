use chrono::{DateTime, Duration, Utc};

use crate::catalog::{RHYME_OPTIONS, RHYME_TARGET, RhymeOption};
use crate::feedback::{FeedbackSlot, Ticket};

use super::{GameError, GamePhase, Mark, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeOutcome {
    pub index: usize,
    pub word: &'static str,
    pub correct: bool,
}

impl RhymeOutcome {
    #[must_use]
    pub fn text(&self, target: &str) -> String {
        if self.correct {
            format!("🎉 Yes! {} rhymes with {target}!", self.word)
        } else {
            format!("❌ {} doesn't rhyme with {target}.", self.word)
        }
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        if self.correct { Tone::Success } else { Tone::Failure }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeResolution {
    pub outcome: RhymeOutcome,
    pub ticket: Ticket,
    pub clears_at: DateTime<Utc>,
}

/// Find the words that rhyme with the target.
#[derive(Debug, Clone, PartialEq)]
pub struct RhymeMatch {
    target: &'static str,
    options: Vec<RhymeOption>,
    feedback: FeedbackSlot<RhymeOutcome>,
    clear_after: Duration,
}

impl RhymeMatch {
    #[must_use]
    pub fn new(clear_after: Duration) -> Self {
        Self {
            target: RHYME_TARGET,
            options: RHYME_OPTIONS.to_vec(),
            feedback: FeedbackSlot::new(),
            clear_after,
        }
    }

    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }

    #[must_use]
    pub fn options(&self) -> &[RhymeOption] {
        &self.options
    }

    /// Judges option `index`. Its mark and text replace any earlier choice and
    /// clear after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OptionOutOfRange` for an unknown option.
    pub fn choose(&mut self, index: usize, now: DateTime<Utc>) -> Result<RhymeResolution, GameError> {
        let option = self
            .options
            .get(index)
            .ok_or(GameError::OptionOutOfRange {
                index,
                count: self.options.len(),
            })?;
        let outcome = RhymeOutcome {
            index,
            word: option.word,
            correct: option.is_rhyme,
        };
        let clears_at = now + self.clear_after;
        let ticket = self.feedback.show(outcome, clears_at);
        Ok(RhymeResolution {
            outcome,
            ticket,
            clears_at,
        })
    }

    pub fn expire(&mut self, ticket: Ticket) -> bool {
        self.feedback.expire(ticket)
    }

    pub fn expire_due(&mut self, now: DateTime<Utc>) -> bool {
        self.feedback.expire_due(now)
    }

    #[must_use]
    pub fn mark(&self, index: usize) -> Option<Mark> {
        self.feedback
            .get()
            .filter(|outcome| outcome.index == index)
            .map(|outcome| if outcome.correct { Mark::Correct } else { Mark::Incorrect })
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase<RhymeOutcome> {
        self.feedback
            .get()
            .map_or(GamePhase::AwaitingSelection, |outcome| GamePhase::Resolved(*outcome))
    }

    /// Current feedback line, empty when nothing is showing.
    #[must_use]
    pub fn feedback_text(&self) -> String {
        self.feedback
            .get()
            .map(|outcome| outcome.text(self.target))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn feedback_tone(&self) -> Tone {
        self.feedback.get().map_or(Tone::Neutral, RhymeOutcome::tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    #[test]
    fn bat_rhymes_and_dog_does_not() {
        let clock = fixed_clock();
        let mut game = RhymeMatch::new(Duration::seconds(3));

        let bat = game.choose(0, clock.now()).unwrap();
        assert!(bat.outcome.correct);
        assert_eq!(game.feedback_text(), "🎉 Yes! BAT rhymes with CAT!");
        assert_eq!(game.mark(0), Some(Mark::Correct));

        let dog = game.choose(1, clock.now()).unwrap();
        assert!(!dog.outcome.correct);
        assert_eq!(game.feedback_text(), "❌ DOG doesn't rhyme with CAT.");
        assert_eq!(game.mark(1), Some(Mark::Incorrect));
        assert_eq!(game.mark(0), None);
    }

    #[test]
    fn feedback_clears_after_three_seconds() {
        let mut clock = fixed_clock();
        let mut game = RhymeMatch::new(Duration::seconds(3));
        game.choose(2, clock.now()).unwrap();

        clock.advance(Duration::seconds(2));
        assert!(!game.expire_due(clock.now()));
        assert_eq!(game.feedback_tone(), Tone::Success);

        clock.advance(Duration::seconds(1));
        assert!(game.expire_due(clock.now()));
        assert_eq!(game.feedback_text(), "");
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
    }

    #[test]
    fn stale_clear_does_not_wipe_newer_choice() {
        let clock = fixed_clock();
        let mut game = RhymeMatch::new(Duration::seconds(3));
        let first = game.choose(0, clock.now()).unwrap();
        game.choose(3, clock.now()).unwrap();

        assert!(!game.expire(first.ticket));
        assert_eq!(game.mark(3), Some(Mark::Incorrect));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let clock = fixed_clock();
        let mut game = RhymeMatch::new(Duration::seconds(3));
        assert_eq!(
            game.choose(9, clock.now()),
            Err(GameError::OptionOutOfRange { index: 9, count: 4 })
        );
    }
}
