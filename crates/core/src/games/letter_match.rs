use chrono::{DateTime, Duration, Utc};

use crate::catalog::{self, ALPHABET, LetterEntry};
use crate::feedback::{FeedbackSlot, Ticket};

use super::{GameError, GamePhase, Mark, Tone};

/// Letters offered by the matching game.
const POOL_SIZE: usize = 6;

pub const LETTER_MATCH_IDLE_TEXT: &str = "👆 Pick a letter!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Match { letter: char },
    Mismatch { upper: char, lower: char },
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, Self::Match { .. })
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Match { .. } => "🎉 Perfect Match!",
            Self::Mismatch { .. } => "❌ Try Again!",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        if self.is_match() { Tone::Success } else { Tone::Failure }
    }
}

/// A resolved pair plus the ticket that will reset the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResolution {
    pub outcome: MatchOutcome,
    pub ticket: Ticket,
    pub resets_at: DateTime<Utc>,
}

/// Pair an uppercase letter with its lowercase form.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterMatch {
    letters: Vec<char>,
    lowercase: Vec<char>,
    upper: Option<char>,
    lower: Option<char>,
    resolution: FeedbackSlot<MatchOutcome>,
    reset_after: Duration,
}

impl LetterMatch {
    /// A game over the first six letters of the alphabet.
    #[must_use]
    pub fn new(reset_after: Duration) -> Self {
        let pool = &ALPHABET[..POOL_SIZE];
        Self {
            letters: pool.iter().map(|e| e.letter).collect(),
            lowercase: pool.iter().map(LetterEntry::lowercase).collect(),
            upper: None,
            lower: None,
            resolution: FeedbackSlot::new(),
            reset_after,
        }
    }

    /// Uppercase letters, in display order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Lowercase letters, in the same order as `letters`.
    #[must_use]
    pub fn lowercase_letters(&self) -> &[char] {
        &self.lowercase
    }

    #[must_use]
    pub fn selection(&self, case: LetterCase) -> Option<char> {
        match case {
            LetterCase::Upper => self.upper,
            LetterCase::Lower => self.lower,
        }
    }

    #[must_use]
    pub fn mark(&self, case: LetterCase, letter: char) -> Option<Mark> {
        (self.selection(case) == Some(letter)).then_some(Mark::Selected)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase<MatchOutcome> {
        self.resolution
            .get()
            .map_or(GamePhase::AwaitingSelection, |outcome| GamePhase::Resolved(*outcome))
    }

    #[must_use]
    pub fn feedback_text(&self) -> &'static str {
        self.resolution
            .get()
            .map_or(LETTER_MATCH_IDLE_TEXT, |outcome| outcome.text())
    }

    #[must_use]
    pub fn feedback_tone(&self) -> Tone {
        self.resolution.get().map_or(Tone::Neutral, |outcome| outcome.tone())
    }

    /// Fills one slot. Once both slots hold a letter the pair is judged and a
    /// reset is scheduled, replacing any reset still pending.
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownLetter` if `letter` is not offered in that case.
    pub fn select(
        &mut self,
        case: LetterCase,
        letter: char,
        now: DateTime<Utc>,
    ) -> Result<Option<MatchResolution>, GameError> {
        let offered = match case {
            LetterCase::Upper => self.letters.contains(&letter),
            LetterCase::Lower => self.lowercase.contains(&letter),
        };
        if !offered {
            return Err(GameError::UnknownLetter(letter));
        }

        match case {
            LetterCase::Upper => self.upper = Some(letter),
            LetterCase::Lower => self.lower = Some(letter),
        }

        let (Some(upper), Some(lower)) = (self.upper, self.lower) else {
            return Ok(None);
        };
        let outcome = if catalog::letter(lower).is_some_and(|entry| entry.letter == upper) {
            MatchOutcome::Match { letter: upper }
        } else {
            MatchOutcome::Mismatch { upper, lower }
        };
        let resets_at = now + self.reset_after;
        let ticket = self.resolution.show(outcome, resets_at);

        Ok(Some(MatchResolution {
            outcome,
            ticket,
            resets_at,
        }))
    }

    /// Timer callback: clears both slots if `ticket` is the latest resolution.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        let cleared = self.resolution.expire(ticket);
        if cleared {
            self.clear_selection();
        }
        cleared
    }

    /// Clears the board if the pending reset is due.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> bool {
        let cleared = self.resolution.expire_due(now);
        if cleared {
            self.clear_selection();
        }
        cleared
    }

    fn clear_selection(&mut self) {
        self.upper = None;
        self.lower = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    #[test]
    fn lowercase_side_mirrors_the_pool() {
        let mut game = LetterMatch::new(Duration::seconds(2));
        assert_eq!(game.lowercase_letters(), &['a', 'b', 'c', 'd', 'e', 'f']);
        assert!(game.select(LetterCase::Lower, 'g', fixed_clock().now()).is_err());
    }

    #[test]
    fn matching_pair_resolves_immediately() {
        let clock = fixed_clock();
        let mut game = LetterMatch::new(Duration::seconds(2));

        assert_eq!(game.select(LetterCase::Upper, 'A', clock.now()).unwrap(), None);
        assert_eq!(game.mark(LetterCase::Upper, 'A'), Some(Mark::Selected));
        let resolution = game
            .select(LetterCase::Lower, 'a', clock.now())
            .unwrap()
            .unwrap();

        assert_eq!(resolution.outcome, MatchOutcome::Match { letter: 'A' });
        assert_eq!(game.feedback_text(), "🎉 Perfect Match!");
        assert_eq!(game.phase(), GamePhase::Resolved(resolution.outcome));
    }

    #[test]
    fn mismatch_then_board_clears_after_timeout() {
        let mut clock = fixed_clock();
        let mut game = LetterMatch::new(Duration::seconds(2));

        game.select(LetterCase::Upper, 'A', clock.now()).unwrap();
        let resolution = game
            .select(LetterCase::Lower, 'b', clock.now())
            .unwrap()
            .unwrap();
        assert_eq!(
            resolution.outcome,
            MatchOutcome::Mismatch {
                upper: 'A',
                lower: 'b'
            }
        );
        assert_eq!(game.feedback_text(), "❌ Try Again!");
        assert_eq!(game.feedback_tone(), Tone::Failure);

        clock.advance(Duration::milliseconds(1999));
        assert!(!game.expire_due(clock.now()));
        clock.advance(Duration::milliseconds(1));
        assert!(game.expire_due(clock.now()));

        assert_eq!(game.selection(LetterCase::Upper), None);
        assert_eq!(game.selection(LetterCase::Lower), None);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
        assert_eq!(game.feedback_text(), LETTER_MATCH_IDLE_TEXT);
    }

    #[test]
    fn reselecting_cancels_the_pending_reset() {
        let clock = fixed_clock();
        let mut game = LetterMatch::new(Duration::seconds(2));

        game.select(LetterCase::Upper, 'A', clock.now()).unwrap();
        let first = game
            .select(LetterCase::Lower, 'b', clock.now())
            .unwrap()
            .unwrap();
        let second = game
            .select(LetterCase::Lower, 'a', clock.now())
            .unwrap()
            .unwrap();

        assert!(!game.expire(first.ticket));
        assert_eq!(game.selection(LetterCase::Lower), Some('a'));
        assert!(game.expire(second.ticket));
        assert_eq!(game.selection(LetterCase::Upper), None);
    }

    #[test]
    fn letters_outside_the_pool_are_rejected() {
        let clock = fixed_clock();
        let mut game = LetterMatch::new(Duration::seconds(2));
        assert_eq!(
            game.select(LetterCase::Upper, 'Z', clock.now()),
            Err(GameError::UnknownLetter('Z'))
        );
        assert_eq!(
            game.select(LetterCase::Lower, 'A', clock.now()),
            Err(GameError::UnknownLetter('A'))
        );
        assert_eq!(game.letters(), &['A', 'B', 'C', 'D', 'E', 'F']);
    }
}
