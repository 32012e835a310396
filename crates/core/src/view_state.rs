//! The active view and its cursor.
//!
//! [`ViewState`] is the only thing that changes while the application runs.
//! It moves exclusively through [`ViewState::apply`], which validates every
//! transition against the projection of the active view, so the cursor
//! always points at an existing item or is empty when there is none.

use tracing::debug;

use crate::cursor::Cursor;
use crate::message::Message;
use crate::projection::{Projection, project};
use crate::snapshot::ProjectSnapshot;
use crate::view::{Direction, ViewKind};

/// Which view is active and what it selects.
///
/// # Examples
///
/// ```
/// use projhub_core::{Cursor, Direction, Message, ViewState, dummy};
///
/// let snapshot = dummy::sample_snapshot().unwrap();
/// let mut state = ViewState::new(&snapshot);
/// assert_eq!(state.cursor(), Cursor::Grouped { group: 0, offset: 0 });
///
/// state.apply(&snapshot, &Message::MoveCursor(Direction::Down));
/// assert_eq!(state.cursor(), Cursor::Grouped { group: 0, offset: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    active: ViewKind,
    cursor: Cursor,
}

impl ViewState {
    /// Starts on the board with the cursor at its origin.
    #[must_use]
    pub fn new(snapshot: &ProjectSnapshot) -> Self {
        Self::with_view(snapshot, ViewKind::default())
    }

    /// Starts on the given view with the cursor at its origin.
    #[must_use]
    pub fn with_view(snapshot: &ProjectSnapshot, view: ViewKind) -> Self {
        Self {
            active: view,
            cursor: project(view, snapshot).origin(),
        }
    }

    /// Returns the active view.
    #[must_use]
    pub const fn active(&self) -> ViewKind {
        self.active
    }

    /// Returns the cursor.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Applies a message and returns `true` if the state changed.
    ///
    /// Messages other than view switches, cursor moves and direct
    /// selections are ignored, as are moves on an empty view and
    /// selections of positions that do not exist.
    pub fn apply(&mut self, snapshot: &ProjectSnapshot, message: &Message) -> bool {
        let before = *self;
        match message {
            Message::SwitchView(view) => self.switch_view(snapshot, *view),
            Message::MoveCursor(direction) => {
                let projection = project(self.active, snapshot);
                if let Some(cursor) = self.moved(&projection, *direction) {
                    self.cursor = cursor;
                }
            }
            Message::SelectAt { group, offset } => {
                let projection = project(self.active, snapshot);
                match projection.cursor_at(*group, *offset) {
                    Some(cursor) => self.cursor = cursor,
                    None => debug!(group, offset, view = %self.active, "ignoring selection outside view"),
                }
            }
            _ => return false,
        }

        let changed = *self != before;
        if changed {
            debug!(view = %self.active, cursor = ?self.cursor, "view state changed");
        }
        changed
    }

    fn switch_view(&mut self, snapshot: &ProjectSnapshot, view: ViewKind) {
        self.active = view;
        self.cursor = project(view, snapshot).origin();
    }

    /// Returns the cursor one step in `direction`, or `None` to stay put.
    fn moved(&self, projection: &Projection<'_>, direction: Direction) -> Option<Cursor> {
        let (group, offset) = self.cursor.position()?;
        match direction {
            Direction::Up => projection.cursor_at(group, offset.checked_sub(1)?),
            Direction::Down => projection.cursor_at(group, offset + 1),
            Direction::Left | Direction::Right if self.active != ViewKind::Board => None,
            Direction::Left => {
                let target = (0..group)
                    .rev()
                    .find(|g| projection.group_len(*g).is_some_and(|len| len > 0))?;
                Self::clamped(projection, target, offset)
            }
            Direction::Right => {
                let count = projection.groups().len();
                let target = (group + 1..count)
                    .find(|g| projection.group_len(*g).is_some_and(|len| len > 0))?;
                Self::clamped(projection, target, offset)
            }
        }
    }

    fn clamped(projection: &Projection<'_>, group: usize, offset: usize) -> Option<Cursor> {
        let last = projection.group_len(group)?.checked_sub(1)?;
        projection.cursor_at(group, offset.min(last))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dummy;
    use crate::item::{Item, Status};

    fn grouped(group: usize, offset: usize) -> Cursor {
        Cursor::Grouped { group, offset }
    }

    fn right() -> Message {
        Message::MoveCursor(Direction::Right)
    }

    #[test]
    fn board_walks_right_and_stops_at_last_column() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        assert_eq!(state.active(), ViewKind::Board);
        assert_eq!(state.cursor(), grouped(0, 0));

        for _ in 0..3 {
            assert!(state.apply(&snapshot, &right()));
        }
        assert_eq!(state.cursor(), grouped(3, 0));

        assert!(!state.apply(&snapshot, &right()));
        assert_eq!(state.cursor(), grouped(3, 0));
    }

    #[test]
    fn switch_to_table_starts_at_first_row() {
        let snapshot = dummy::table_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        state.apply(&snapshot, &Message::SwitchView(ViewKind::Table));

        assert_eq!(state.cursor(), Cursor::Flat { row: 0 });
        assert_eq!(state.cursor().position(), Some((0, 0)));
        assert_eq!(project(state.active(), &snapshot).len(), 5);
    }

    #[test]
    fn down_clamps_at_group_end() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        for _ in 0..10 {
            state.apply(&snapshot, &Message::MoveCursor(Direction::Down));
        }
        assert_eq!(state.cursor(), grouped(0, 2));

        assert!(!state.apply(&snapshot, &Message::MoveCursor(Direction::Down)));
    }

    #[test]
    fn up_at_top_is_noop() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        assert!(!state.apply(&snapshot, &Message::MoveCursor(Direction::Up)));
        assert_eq!(state.cursor(), grouped(0, 0));
    }

    #[test]
    fn right_clamps_offset_to_shorter_column() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        state.apply(&snapshot, &Message::SelectAt { group: 0, offset: 2 });
        state.apply(&snapshot, &right());
        assert_eq!(state.cursor(), grouped(1, 1));
        state.apply(&snapshot, &right());
        assert_eq!(state.cursor(), grouped(2, 0));
    }

    #[test]
    fn left_and_right_skip_empty_columns() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Backlog, date),
                Item::new("b", "B", Status::Done, date),
            ],
        )
        .unwrap();
        let mut state = ViewState::new(&snapshot);

        state.apply(&snapshot, &right());
        assert_eq!(state.cursor(), grouped(3, 0));
        state.apply(&snapshot, &Message::MoveCursor(Direction::Left));
        assert_eq!(state.cursor(), grouped(0, 0));
    }

    #[test]
    fn horizontal_moves_ignored_outside_board() {
        let snapshot = dummy::sample_snapshot().unwrap();
        for view in [ViewKind::Table, ViewKind::Roadmap] {
            let mut state = ViewState::with_view(&snapshot, view);
            let origin = state.cursor();
            assert!(!state.apply(&snapshot, &right()));
            assert!(!state.apply(&snapshot, &Message::MoveCursor(Direction::Left)));
            assert_eq!(state.cursor(), origin);
        }
    }

    #[test]
    fn switch_view_resets_to_origin() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        state.apply(&snapshot, &right());
        state.apply(&snapshot, &Message::MoveCursor(Direction::Down));
        assert_eq!(state.cursor(), grouped(1, 1));

        state.apply(&snapshot, &Message::SwitchView(ViewKind::Board));
        assert_eq!(state.cursor(), grouped(0, 0));

        state.apply(&snapshot, &Message::SwitchView(ViewKind::Roadmap));
        assert_eq!(state.cursor(), grouped(0, 0));
    }

    #[test]
    fn select_outside_view_is_ignored() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        assert!(!state.apply(&snapshot, &Message::SelectAt { group: 2, offset: 1 }));
        assert!(!state.apply(&snapshot, &Message::SelectAt { group: 9, offset: 0 }));
        assert!(state.apply(&snapshot, &Message::SelectAt { group: 3, offset: 1 }));
        assert_eq!(state.cursor(), grouped(3, 1));

        state.apply(&snapshot, &Message::SwitchView(ViewKind::Table));
        assert!(!state.apply(&snapshot, &Message::SelectAt { group: 1, offset: 0 }));
        assert!(state.apply(&snapshot, &Message::SelectAt { group: 0, offset: 7 }));
        assert_eq!(state.cursor(), Cursor::Flat { row: 7 });
    }

    #[test]
    fn app_messages_are_ignored() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let mut state = ViewState::new(&snapshot);
        for message in [
            Message::Quit,
            Message::ToggleHelp,
            Message::ToggleDetail,
            Message::JumpToFirst,
            Message::JumpToLast,
            Message::Escape,
            Message::ClickAt { column: 3, row: 4 },
        ] {
            assert!(!state.apply(&snapshot, &message));
        }
        assert_eq!(state, ViewState::new(&snapshot));
    }

    #[test]
    fn empty_snapshot_stays_empty() {
        let snapshot = ProjectSnapshot::empty("p");
        let mut state = ViewState::new(&snapshot);
        assert_eq!(state.cursor(), Cursor::Empty);

        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(!state.apply(&snapshot, &Message::MoveCursor(direction)));
        }
        assert!(!state.apply(&snapshot, &Message::SelectAt { group: 0, offset: 0 }));
        assert_eq!(state.cursor(), Cursor::Empty);

        state.apply(&snapshot, &Message::SwitchView(ViewKind::Table));
        assert_eq!(state.cursor(), Cursor::Empty);
    }
}
