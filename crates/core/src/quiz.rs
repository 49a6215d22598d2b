use thiserror::Error;

use crate::catalog::{OPTION_COUNT, QUIZ_QUESTIONS, QuizQuestion};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,
    #[error("question {index} has correct index {correct} out of range")]
    InvalidQuestion { index: usize, correct: usize },
    #[error("quiz is already in progress")]
    AlreadyRunning,
    #[error("no question is waiting for an answer")]
    NotAwaitingAnswer,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("option {selected} is out of range (0..{count})")]
    OptionOutOfRange { selected: usize, count: usize },
}

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where the quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    InProgress { index: usize },
    /// The answer for `index` has been scored; the marks stay visible until `advance`.
    AwaitingNext { index: usize, selected: usize },
    Completed,
}

/// Visual state of one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

/// Qualitative bucket for the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Encouraging,
}

impl ScoreTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else {
            Self::Encouraging
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Encouraging => "encouraging",
        }
    }

    /// The congratulatory line read out when the quiz finishes.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work! You're becoming a great reader!",
            Self::Good => "Good job! Keep practicing and you'll improve even more!",
            Self::Encouraging => "Keep practicing! You're learning and that's what matters!",
        }
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub score: u32,
}

impl AnswerOutcome {
    #[must_use]
    pub fn announcement(&self) -> &'static str {
        if self.is_correct {
            "Correct answer!"
        } else {
            "Incorrect answer. The correct answer is highlighted in green."
        }
    }
}

/// Final tally once every question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: ScoreTier,
}

impl QuizResult {
    fn new(score: u32, total: u32) -> Self {
        let percentage = rounded_percent(score as usize, total as usize);
        Self {
            score,
            total,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You got {} out of {} questions correct! ({}%)",
            self.score, self.total, self.percentage
        )
    }
}

/// What `advance` moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Completed(QuizResult),
}

/// Which of the quiz's outer controls are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizControls {
    pub show_start: bool,
    pub show_next: bool,
    pub show_results: bool,
}

/// Projection of the question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub marks: [OptionMark; OPTION_COUNT],
    /// Options stop accepting input once an answer is scored.
    pub locked: bool,
}

impl QuestionView {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }
}

/// `round(part / total * 100)`, rounding halves up. Zero when `total` is zero.
#[must_use]
pub fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (part.saturating_mul(200) + total) / total.saturating_mul(2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Status line shown next to the progress bar.
#[must_use]
pub fn progress_label(percentage: u32) -> String {
    match percentage {
        0 => "Ready to start!".to_string(),
        100 => "Assessment complete!".to_string(),
        other => format!("Progress: {other}%"),
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Five-question multiple-choice quiz.
///
/// Questions are presented once each, in order. Answering and moving on are two
/// separate steps so the correct/incorrect marks stay visible until the learner
/// asks for the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
    index: usize,
    score: u32,
}

impl QuizEngine {
    /// The bundled assessment.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: QUIZ_QUESTIONS.to_vec(),
            phase: QuizPhase::Idle,
            index: 0,
            score: 0,
        }
    }

    /// Builds an engine over a custom question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for an empty list and
    /// `QuizError::InvalidQuestion` when a correct index is out of range.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        if let Some((index, question)) = questions
            .iter()
            .enumerate()
            .find(|(_, q)| q.correct_index >= OPTION_COUNT)
        {
            return Err(QuizError::InvalidQuestion {
                index,
                correct: question.correct_index,
            });
        }
        Ok(Self {
            questions,
            phase: QuizPhase::Idle,
            index: 0,
            score: 0,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Begins a fresh session from question 0.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyRunning` unless the quiz is idle or completed.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if !matches!(self.phase, QuizPhase::Idle | QuizPhase::Completed) {
            return Err(QuizError::AlreadyRunning);
        }
        self.score = 0;
        self.present_question(0);
        Ok(())
    }

    /// Puts question `index` on screen, or finishes the quiz when it is past the end.
    fn present_question(&mut self, index: usize) {
        if index >= self.questions.len() {
            self.index = self.questions.len();
            self.phase = QuizPhase::Completed;
            return;
        }
        self.index = index;
        self.phase = QuizPhase::InProgress { index };
    }

    /// Scores `selected` against the current question and locks the options.
    ///
    /// # Errors
    ///
    /// - `NotAwaitingAnswer` unless a question is in progress
    /// - `OptionOutOfRange` if `selected` is not one of the four options
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        let QuizPhase::InProgress { index } = self.phase else {
            return Err(QuizError::NotAwaitingAnswer);
        };
        if selected >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange {
                selected,
                count: OPTION_COUNT,
            });
        }

        let question = &self.questions[index];
        let is_correct = question.is_correct(selected);
        if is_correct {
            self.score += 1;
        }
        self.phase = QuizPhase::AwaitingNext { index, selected };

        Ok(AnswerOutcome {
            index,
            selected,
            correct_index: question.correct_index,
            is_correct,
            score: self.score,
        })
    }

    /// Moves past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` unless the current question was answered.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        let QuizPhase::AwaitingNext { index, .. } = self.phase else {
            return Err(QuizError::NotAnswered);
        };
        self.present_question(index + 1);
        match self.phase {
            QuizPhase::InProgress { index } => Ok(AdvanceOutcome::Next { index }),
            _ => Ok(AdvanceOutcome::Completed(self.final_result())),
        }
    }

    /// Returns to the idle screen. Safe to call from any phase.
    pub fn restart(&mut self) {
        self.phase = QuizPhase::Idle;
        self.index = 0;
        self.score = 0;
    }

    fn final_result(&self) -> QuizResult {
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        QuizResult::new(self.score, total)
    }

    /// The final tally, once completed.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        matches!(self.phase, QuizPhase::Completed).then(|| self.final_result())
    }

    /// Progress bar value for the current phase.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        match self.phase {
            QuizPhase::Idle => 0,
            QuizPhase::InProgress { index } | QuizPhase::AwaitingNext { index, .. } => {
                rounded_percent(index, self.questions.len())
            }
            QuizPhase::Completed => 100,
        }
    }

    #[must_use]
    pub fn controls(&self) -> QuizControls {
        QuizControls {
            show_start: matches!(self.phase, QuizPhase::Idle),
            show_next: matches!(self.phase, QuizPhase::AwaitingNext { .. }),
            show_results: matches!(self.phase, QuizPhase::Completed),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<QuestionView> {
        let (index, answered) = match self.phase {
            QuizPhase::InProgress { index } => (index, None),
            QuizPhase::AwaitingNext { index, selected } => (index, Some(selected)),
            QuizPhase::Idle | QuizPhase::Completed => return None,
        };
        let question = self.questions.get(index)?;

        let mut marks = [OptionMark::Neutral; OPTION_COUNT];
        if let Some(selected) = answered {
            marks[question.correct_index] = OptionMark::Correct;
            if selected != question.correct_index {
                marks[selected] = OptionMark::Incorrect;
            }
        }

        Some(QuestionView {
            index,
            total: self.questions.len(),
            prompt: question.prompt,
            options: question.options,
            marks,
            locked: answered.is_some(),
        })
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::standard()
    }
}
