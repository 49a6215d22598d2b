use phonics_core::games::{LetterCase, LetterMatch, Mark, RhymeMatch, SoundDetective, Tone};

#[must_use]
pub fn mark_class(mark: Option<Mark>) -> &'static str {
    match mark {
        None => "answer-btn",
        Some(Mark::Selected | Mark::Correct) => "answer-btn correct",
        Some(Mark::Incorrect) => "answer-btn incorrect",
    }
}

#[must_use]
pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "game-feedback",
        Tone::Success => "game-feedback game-feedback--success",
        Tone::Failure => "game-feedback game-feedback--failure",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterChoiceVm {
    pub letter: char,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterMatchVm {
    pub uppercase: Vec<LetterChoiceVm>,
    pub lowercase: Vec<LetterChoiceVm>,
    pub feedback: &'static str,
    pub feedback_class: &'static str,
}

#[must_use]
pub fn map_letter_match(game: &LetterMatch) -> LetterMatchVm {
    let side = |case: LetterCase| {
        let letters = match case {
            LetterCase::Upper => game.letters(),
            LetterCase::Lower => game.lowercase_letters(),
        };
        letters
            .iter()
            .map(|&letter| LetterChoiceVm {
                letter,
                class: mark_class(game.mark(case, letter)),
            })
            .collect()
    };
    LetterMatchVm {
        uppercase: side(LetterCase::Upper),
        lowercase: side(LetterCase::Lower),
        feedback: game.feedback_text(),
        feedback_class: tone_class(game.feedback_tone()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectiveVm {
    pub options: Vec<LetterChoiceVm>,
    pub feedback: String,
    pub feedback_class: &'static str,
}

#[must_use]
pub fn map_detective(game: &SoundDetective) -> DetectiveVm {
    let (feedback, tone) = game.feedback().unwrap_or((String::new(), Tone::Neutral));
    DetectiveVm {
        options: game
            .options()
            .iter()
            .map(|letter| LetterChoiceVm {
                letter: *letter,
                class: mark_class(game.mark(*letter)),
            })
            .collect(),
        feedback,
        feedback_class: tone_class(tone),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RhymeChoiceVm {
    pub index: usize,
    pub word: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RhymeVm {
    pub target: &'static str,
    pub options: Vec<RhymeChoiceVm>,
    pub feedback: String,
    pub feedback_class: &'static str,
}

#[must_use]
pub fn map_rhyme(game: &RhymeMatch) -> RhymeVm {
    RhymeVm {
        target: game.target(),
        options: game
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| RhymeChoiceVm {
                index,
                word: option.word,
                class: mark_class(game.mark(index)),
            })
            .collect(),
        feedback: game.feedback_text(),
        feedback_class: tone_class(game.feedback_tone()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use phonics_core::time::fixed_now;

    use super::*;

    #[test]
    fn letter_match_projects_selection_and_feedback() {
        let mut game = LetterMatch::new(Duration::seconds(2));
        let vm = map_letter_match(&game);
        assert_eq!(vm.uppercase.len(), 6);
        assert_eq!(vm.lowercase[0].letter, 'a');
        assert_eq!(vm.feedback, "👆 Pick a letter!");
        assert_eq!(vm.feedback_class, "game-feedback");

        game.select(LetterCase::Upper, 'B', fixed_now()).unwrap();
        game.select(LetterCase::Lower, 'b', fixed_now()).unwrap();
        let vm = map_letter_match(&game);
        assert_eq!(vm.uppercase[1].class, "answer-btn correct");
        assert_eq!(vm.lowercase[1].class, "answer-btn correct");
        assert_eq!(vm.uppercase[0].class, "answer-btn");
        assert_eq!(vm.feedback, "🎉 Perfect Match!");
        assert_eq!(vm.feedback_class, "game-feedback game-feedback--success");
    }

    #[test]
    fn detective_marks_wrong_guess() {
        let mut game = SoundDetective::new();
        game.check('C').unwrap();
        let vm = map_detective(&game);
        assert_eq!(vm.options[2].class, "answer-btn incorrect");
        assert_eq!(vm.feedback, "❌ That was A. Try again!");
    }

    #[test]
    fn rhyme_marks_only_the_chosen_word() {
        let mut game = RhymeMatch::new(Duration::seconds(3));
        game.choose(2, fixed_now()).unwrap();
        let vm = map_rhyme(&game);
        assert_eq!(vm.target, "CAT");
        assert_eq!(vm.options[2].class, "answer-btn correct");
        assert_eq!(vm.options[0].class, "answer-btn");
        assert_eq!(vm.feedback, "🎉 Yes! HAT rhymes with CAT!");
    }
}
