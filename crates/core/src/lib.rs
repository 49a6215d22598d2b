#![forbid(unsafe_code)]

pub mod announcer;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod games;
pub mod navigation;
pub mod quiz;
pub mod sections;
pub mod settings;
pub mod speech;
pub mod time;

pub use error::Error;
pub use settings::{SettingsError, TutorialSettings};
pub use time::Clock;
