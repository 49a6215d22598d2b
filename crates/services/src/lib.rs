#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod games;
pub mod quiz;
pub mod speech;
pub mod tutorial;

pub use phonics_core::{Clock, TutorialSettings};

pub use audio::{AudioCue, AudioService};
pub use error::TutorialError;
pub use games::{GameFlowService, LetterMatchStep};
pub use quiz::{QuizAdvance, QuizAnswer, QuizFlowService};
pub use speech::{NoSpeech, RecordingSpeaker, Speaker, SpeechService};
pub use tutorial::TutorialServices;
