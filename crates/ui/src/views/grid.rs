use dioxus::prelude::*;
use phonics_core::Clock;
use phonics_core::feedback::FeedbackSlot;
use phonics_core::navigation::{GridGeometry, GridMove, KeyAction, column_count, plan_move};

use super::feedback::to_std;
use super::scripts::{focus_grid_card, read_grid_track_list, watch_grid_track_list};
use crate::context::AppContext;

/// Arrow-key movement and highlight state for one card grid.
#[derive(Clone, Copy, PartialEq)]
pub struct CardGrid {
    id: &'static str,
    len: usize,
    clock: Clock,
    /// Last measured column count; `None` until the grid has been laid out.
    columns: Signal<Option<usize>>,
    highlight: Signal<FeedbackSlot<usize>>,
}

pub fn use_card_grid(id: &'static str, len: usize) -> CardGrid {
    let clock = use_context::<AppContext>().clock();
    let mut columns = use_signal(|| None);
    let highlight = use_signal(FeedbackSlot::new);

    use_effect(move || {
        spawn(watch_grid_track_list(id, move |tracks| {
            columns.set(Some(column_count(&tracks)));
        }));
    });

    CardGrid {
        id,
        len,
        clock,
        columns,
        highlight,
    }
}

impl CardGrid {
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.read().get() == Some(&index)
    }

    /// Lifts card `index` for `duration`, dropping any earlier highlight.
    pub fn highlight(self, index: usize, duration: chrono::Duration) {
        let mut highlight = self.highlight;
        let ticket = highlight.write().show(index, self.clock.now() + duration);
        spawn(async move {
            tokio::time::sleep(to_std(duration)).await;
            highlight.write().expire(ticket);
        });
    }

    /// Moves focus for an arrow key pressed on card `index`.
    ///
    /// The column count is kept current by a resize watcher. The default
    /// action is cancelled only when focus actually moves. A row move before
    /// the first measurement reads the layout first and then moves.
    pub fn on_key(self, index: usize, evt: &KeyboardEvent) {
        let KeyAction::Grid(key) = KeyAction::from_key_name(&evt.key().to_string()) else {
            return;
        };
        match plan_move(*self.columns.peek(), self.len, index, key) {
            GridMove::To(next) => {
                evt.prevent_default();
                focus_grid_card(self.id, next);
            }
            GridMove::Stay => {}
            GridMove::NeedsColumns => {
                let mut columns = self.columns;
                let (id, len) = (self.id, self.len);
                spawn(async move {
                    let Some(tracks) = read_grid_track_list(id).await else {
                        return;
                    };
                    let count = column_count(&tracks);
                    columns.set(Some(count));
                    if let Some(next) = GridGeometry::new(count, len).move_focus(index, key) {
                        focus_grid_card(id, next);
                    }
                });
            }
        }
    }
}

/// Enter and Space activate a card the way a click does.
#[must_use]
pub fn is_activation_key(evt: &KeyboardEvent) -> bool {
    matches!(evt.key(), Key::Enter) || evt.key() == Key::Character(" ".into())
}
