/// The word every rhyme option is compared against.
pub const RHYME_TARGET: &str = "CAT";

/// A rhyme game button. Whether it rhymes is decided up front, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeOption {
    pub word: &'static str,
    pub is_rhyme: bool,
}

pub const RHYME_OPTIONS: [RhymeOption; 4] = [
    RhymeOption { word: "BAT", is_rhyme: true },
    RhymeOption { word: "DOG", is_rhyme: false },
    RhymeOption { word: "HAT", is_rhyme: true },
    RhymeOption { word: "CAR", is_rhyme: false },
];
