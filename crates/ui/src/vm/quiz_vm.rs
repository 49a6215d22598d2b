use phonics_core::quiz::{OptionMark, QuizControls, QuizEngine, progress_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(usize),
    Next,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: &'static str,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub heading: String,
    pub prompt: &'static str,
    pub options: Vec<QuizOptionVm>,
}

/// Everything the assessment section shows for one engine state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub controls: QuizControls,
    pub question: Option<QuizQuestionVm>,
    pub progress: u32,
    pub progress_label: String,
    pub summary: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.progress)
    }

    #[must_use]
    pub fn progress_text(&self) -> String {
        format!("{}%", self.progress)
    }
}

#[must_use]
pub fn option_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Neutral => "answer-btn",
        OptionMark::Correct => "answer-btn correct",
        OptionMark::Incorrect => "answer-btn incorrect",
    }
}

#[must_use]
pub fn map_quiz(engine: &QuizEngine) -> QuizVm {
    let question = engine.current_question().map(|view| QuizQuestionVm {
        heading: view.heading(),
        prompt: view.prompt,
        options: view
            .options
            .into_iter()
            .zip(view.marks)
            .enumerate()
            .map(|(index, (label, mark))| QuizOptionVm {
                index,
                label,
                class: option_class(mark),
                disabled: view.locked,
            })
            .collect(),
    });
    let progress = engine.progress_percent();
    QuizVm {
        controls: engine.controls(),
        question,
        progress,
        progress_label: progress_label(progress),
        summary: engine.result().map(|result| result.summary()),
    }
}
