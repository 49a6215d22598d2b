/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; OPTION_COUNT],
    pub correct_index: usize,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct_index.min(OPTION_COUNT - 1)]
    }
}

/// The assessment, in presentation order.
pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "What letter comes after A?",
        options: ["B", "C", "D", "E"],
        correct_index: 0,
    },
    QuizQuestion {
        prompt: "Which letter makes the 'mmm' sound?",
        options: ["N", "M", "L", "P"],
        correct_index: 1,
    },
    QuizQuestion {
        prompt: "What word do these sounds make: C + A + T?",
        options: ["DOG", "CAT", "SUN", "HAT"],
        correct_index: 1,
    },
    QuizQuestion {
        prompt: "Which word rhymes with 'SUN'?",
        options: ["CAR", "FUN", "DOG", "BOOK"],
        correct_index: 1,
    },
    QuizQuestion {
        prompt: "How many letters are in the alphabet?",
        options: ["24", "25", "26", "27"],
        correct_index: 2,
    },
];
