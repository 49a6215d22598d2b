//! Shared error type for the services crate.

use thiserror::Error;

use phonics_core::catalog::CatalogError;
use phonics_core::games::GameError;
use phonics_core::quiz::QuizError;
use phonics_core::SettingsError;

/// Errors emitted by tutorial services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorialError {
    #[error(transparent)]
    Core(#[from] phonics_core::Error),
}

impl From<QuizError> for TutorialError {
    fn from(err: QuizError) -> Self {
        Self::Core(err.into())
    }
}

impl From<GameError> for TutorialError {
    fn from(err: GameError) -> Self {
        Self::Core(err.into())
    }
}

impl From<SettingsError> for TutorialError {
    fn from(err: SettingsError) -> Self {
        Self::Core(err.into())
    }
}

impl From<CatalogError> for TutorialError {
    fn from(err: CatalogError) -> Self {
        Self::Core(err.into())
    }
}

impl TutorialError {
    /// The quiz error underneath, if that is what failed.
    #[must_use]
    pub fn as_quiz(&self) -> Option<QuizError> {
        match self {
            Self::Core(phonics_core::Error::Quiz(err)) => Some(*err),
            Self::Core(_) => None,
        }
    }
}
