use thiserror::Error;

use crate::catalog::CatalogError;
use crate::games::GameError;
use crate::quiz::QuizError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
