use rand::Rng;

use crate::catalog::ALPHABET;

use super::{GameError, GamePhase, Mark, Tone};

const POOL_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectiveOutcome {
    Correct { letter: char },
    Incorrect { guessed: char, answer: char },
}

impl DetectiveOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Correct { .. } => "🎉 Correct! Great listening!".to_string(),
            Self::Incorrect { answer, .. } => format!("❌ That was {answer}. Try again!"),
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        if self.is_correct() { Tone::Success } else { Tone::Failure }
    }
}

/// Hear a letter, pick it out of four.
///
/// Marks and feedback persist until the next sound is played; there is no
/// timed reset in this game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundDetective {
    pool: Vec<char>,
    current: char,
    marks: Vec<(char, Mark)>,
    last: Option<DetectiveOutcome>,
}

impl Default for SoundDetective {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundDetective {
    /// A game over `A`–`D`. Until a sound is played the hidden letter is `A`.
    #[must_use]
    pub fn new() -> Self {
        let pool: Vec<char> = ALPHABET.iter().take(POOL_SIZE).map(|e| e.letter).collect();
        Self {
            current: pool[0],
            pool,
            marks: Vec::new(),
            last: None,
        }
    }

    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` when `pool` is empty.
    pub fn with_pool(pool: Vec<char>) -> Result<Self, GameError> {
        let Some(&first) = pool.first() else {
            return Err(GameError::EmptyPool);
        };
        Ok(Self {
            current: first,
            pool,
            marks: Vec::new(),
            last: None,
        })
    }

    #[must_use]
    pub fn options(&self) -> &[char] {
        &self.pool
    }

    /// The letter the learner is listening for.
    #[must_use]
    pub fn current(&self) -> char {
        self.current
    }

    /// Picks a new hidden letter uniformly at random and wipes old marks.
    pub fn play_sound<R: Rng + ?Sized>(&mut self, rng: &mut R) -> char {
        let index = rng.random_range(0..self.pool.len());
        self.current = self.pool[index];
        self.marks.clear();
        self.last = None;
        self.current
    }

    /// # Errors
    ///
    /// Returns `GameError::UnknownLetter` if `letter` is not one of the options.
    pub fn check(&mut self, letter: char) -> Result<DetectiveOutcome, GameError> {
        if !self.pool.contains(&letter) {
            return Err(GameError::UnknownLetter(letter));
        }
        let (outcome, mark) = if letter == self.current {
            (DetectiveOutcome::Correct { letter }, Mark::Correct)
        } else {
            (
                DetectiveOutcome::Incorrect {
                    guessed: letter,
                    answer: self.current,
                },
                Mark::Incorrect,
            )
        };

        self.marks.retain(|(marked, _)| *marked != letter);
        self.marks.push((letter, mark));
        self.last = Some(outcome);
        Ok(outcome)
    }

    #[must_use]
    pub fn mark(&self, letter: char) -> Option<Mark> {
        self.marks
            .iter()
            .find(|(marked, _)| *marked == letter)
            .map(|(_, mark)| *mark)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase<DetectiveOutcome> {
        self.last
            .map_or(GamePhase::AwaitingSelection, GamePhase::Resolved)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<(String, Tone)> {
        self.last.map(|outcome| (outcome.text(), outcome.tone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn play_picks_from_pool_and_clears_marks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = SoundDetective::new();
        game.check('B').unwrap();
        assert!(game.mark('B').is_some());

        for _ in 0..32 {
            let letter = game.play_sound(&mut rng);
            assert!(game.options().contains(&letter));
            assert_eq!(game.current(), letter);
        }
        assert_eq!(game.mark('B'), None);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
    }

    #[test]
    fn wrong_guess_reveals_answer_and_persists() {
        let mut game = SoundDetective::with_pool(vec!['C']).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        game.play_sound(&mut rng);

        let outcome = game.check('C').unwrap();
        assert!(outcome.is_correct());
        assert_eq!(game.mark('C'), Some(Mark::Correct));

        let mut game = SoundDetective::new();
        let outcome = game.check('D').unwrap();
        assert_eq!(
            outcome,
            DetectiveOutcome::Incorrect {
                guessed: 'D',
                answer: 'A'
            }
        );
        assert_eq!(outcome.text(), "❌ That was A. Try again!");
        assert_eq!(game.mark('D'), Some(Mark::Incorrect));
        assert_eq!(game.feedback().map(|(_, tone)| tone), Some(Tone::Failure));
    }

    #[test]
    fn rejects_letters_outside_pool() {
        let mut game = SoundDetective::new();
        assert_eq!(game.check('Q'), Err(GameError::UnknownLetter('Q')));
        assert_eq!(SoundDetective::with_pool(Vec::new()), Err(GameError::EmptyPool));
    }
}
