//! Keyboard focus movement across card grids.

/// Focus ring applied to every interactive element while it has focus.
pub const FOCUS_OUTLINE: &str = "3px solid #F39C12";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

/// Elements that receive the focus ring.
pub const FOCUSABLE_SELECTOR: &str = "button, [tabindex]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

impl NavKey {
    /// Up and Down move by a whole row, so they depend on the column count.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// What a key press means to the focus manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Grid(NavKey),
    /// Escape: jump back to the first navigation button.
    ReturnToNav,
    Ignore,
}

impl KeyAction {
    /// Classifies a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowUp" => Self::Grid(NavKey::Up),
            "ArrowDown" => Self::Grid(NavKey::Down),
            "ArrowLeft" => Self::Grid(NavKey::Left),
            "ArrowRight" => Self::Grid(NavKey::Right),
            "Escape" => Self::ReturnToNav,
            _ => Self::Ignore,
        }
    }
}

/// Counts the tracks in a computed `grid-template-columns` value.
///
/// The computed value lists one length per column (`"120px 120px 120px"`);
/// bracketed line names are skipped. Anything without tracks counts as one column.
#[must_use]
pub fn column_count(track_list: &str) -> usize {
    let trimmed = track_list.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return 1;
    }

    let mut count = 0;
    let mut in_names = false;
    for token in trimmed.split_whitespace() {
        if token.starts_with('[') {
            in_names = true;
        }
        if !in_names {
            count += 1;
        }
        if token.ends_with(']') {
            in_names = false;
        }
    }
    count.max(1)
}

/// Shape of a rendered card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    columns: usize,
    len: usize,
}

impl GridGeometry {
    #[must_use]
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            columns: columns.max(1),
            len,
        }
    }

    #[must_use]
    pub fn from_track_list(track_list: &str, len: usize) -> Self {
        Self::new(column_count(track_list), len)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index reached from `current` by `key`. No wraparound: a horizontal move
    /// stops at the first or last card, and a vertical move that would leave
    /// the grid keeps focus where it is.
    #[must_use]
    pub fn step(&self, current: usize, key: NavKey) -> usize {
        let Some(last) = self.len.checked_sub(1) else {
            return 0;
        };
        let current = current.min(last);
        match key {
            NavKey::Right => (current + 1).min(last),
            NavKey::Left => current.saturating_sub(1),
            NavKey::Down => {
                let below = current + self.columns;
                if below <= last { below } else { current }
            }
            NavKey::Up => current.checked_sub(self.columns).unwrap_or(current),
        }
    }

    /// Like `step`, but `None` when focus would not move.
    #[must_use]
    pub fn move_focus(&self, current: usize, key: NavKey) -> Option<usize> {
        let next = self.step(current, key);
        (next != current && next < self.len).then_some(next)
    }
}

/// Outcome of an arrow key on a grid whose layout may not be measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    /// Focus moves to this card and the key's default is cancelled.
    To(usize),
    /// Focus stays and the key keeps its default.
    Stay,
    /// A row move with no measured layout; measure, then plan again.
    NeedsColumns,
}

/// Plans `key` on card `current` of a `len`-card grid.
///
/// `columns` is the last measured column count. Horizontal moves never need
/// it; vertical moves never guess it.
#[must_use]
pub fn plan_move(columns: Option<usize>, len: usize, current: usize, key: NavKey) -> GridMove {
    let columns = match columns {
        Some(columns) => columns,
        None if key.is_vertical() => return GridMove::NeedsColumns,
        None => 1,
    };
    match GridGeometry::new(columns, len).move_focus(current, key) {
        Some(next) => GridMove::To(next),
        None => GridMove::Stay,
    }
}
