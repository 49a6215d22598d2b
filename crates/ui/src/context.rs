use std::sync::Arc;

use phonics_core::{Clock, TutorialSettings};
use services::{AudioService, GameFlowService, QuizFlowService, TutorialServices};

pub trait UiApp: Send + Sync {
    fn tutorial(&self) -> TutorialServices;
}

#[derive(Clone)]
pub struct AppContext {
    tutorial: TutorialServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tutorial: app.tutorial(),
        }
    }

    #[must_use]
    pub fn tutorial(&self) -> &TutorialServices {
        &self.tutorial
    }

    #[must_use]
    pub fn settings(&self) -> TutorialSettings {
        self.tutorial.settings()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.tutorial.clock()
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizFlowService> {
        self.tutorial.quiz()
    }

    #[must_use]
    pub fn games(&self) -> Arc<GameFlowService> {
        self.tutorial.games()
    }

    #[must_use]
    pub fn audio(&self) -> Arc<AudioService> {
        self.tutorial.audio()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
