mod blending;
mod feedback;
mod games;
mod grid;
mod home;
mod letters;
mod quiz;
mod scripts;
mod sessions;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use blending::BlendingView;
pub use feedback::{AudioToast, FeedbackState, LiveRegion, use_feedback_provider};
pub use games::GamesView;
pub use grid::{CardGrid, is_activation_key, use_card_grid};
pub use home::IntroductionView;
pub use letters::{LettersView, SoundsView};
pub use quiz::AssessmentView;
pub use scripts::{
    focus_first_nav, focus_grid_card, install_focus_binding, read_grid_track_list,
    watch_grid_track_list, watch_script_faults,
};
pub use sessions::{SessionState, use_session_provider};
