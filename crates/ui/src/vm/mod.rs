mod cards_vm;
mod games_vm;
mod nav_vm;
mod quiz_vm;

pub use cards_vm::{
    LetterCardVm, SoundCardVm, WORD_COLOR, WordCardVm, card_style, map_letter_cards,
    map_sound_cards, map_word_cards,
};
pub use games_vm::{
    DetectiveVm, LetterChoiceVm, LetterMatchVm, RhymeChoiceVm, RhymeVm, map_detective,
    map_letter_match, map_rhyme, mark_class, tone_class,
};
pub use nav_vm::{NavButtonVm, map_nav_buttons};
pub use quiz_vm::{QuizIntent, QuizOptionVm, QuizQuestionVm, QuizVm, map_quiz, option_class};
