//! A snapshot together with its view state.

use crate::cursor::Cursor;
use crate::item::Item;
use crate::message::Message;
use crate::projection::{Projection, project};
use crate::snapshot::ProjectSnapshot;
use crate::view::ViewKind;
use crate::view_state::ViewState;

/// Owns the snapshot and the view state so they cannot drift apart.
///
/// # Examples
///
/// ```
/// use projhub_core::{Cursor, Message, Session, ViewKind, dummy};
///
/// let mut session = Session::new(dummy::sample_snapshot().unwrap());
/// session.apply(&Message::SwitchView(ViewKind::Table));
///
/// let frame = session.frame();
/// assert_eq!(frame.view, ViewKind::Table);
/// assert_eq!(frame.cursor, Cursor::Flat { row: 0 });
/// assert_eq!(frame.selected_item().map(|i| i.id.as_str()), Some("#123"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: ProjectSnapshot,
    state: ViewState,
}

impl Session {
    /// Starts a session on the board.
    #[must_use]
    pub fn new(snapshot: ProjectSnapshot) -> Self {
        Self::with_view(snapshot, ViewKind::default())
    }

    /// Starts a session on the given view.
    #[must_use]
    pub fn with_view(snapshot: ProjectSnapshot, view: ViewKind) -> Self {
        let state = ViewState::with_view(&snapshot, view);
        Self { snapshot, state }
    }

    /// Returns the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &ProjectSnapshot {
        &self.snapshot
    }

    /// Returns the view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the active view.
    #[must_use]
    pub fn active_view(&self) -> ViewKind {
        self.state.active()
    }

    /// Applies a message; returns `true` if the view state changed.
    pub fn apply(&mut self, message: &Message) -> bool {
        self.state.apply(&self.snapshot, message)
    }

    /// Derives the frame to render from the current state.
    #[must_use]
    pub fn frame(&self) -> ViewFrame<'_> {
        ViewFrame {
            view: self.state.active(),
            projection: project(self.state.active(), &self.snapshot),
            cursor: self.state.cursor(),
        }
    }
}

/// A consistent view of the active projection and its cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame<'a> {
    /// The active view.
    pub view: ViewKind,
    /// The projection of the active view.
    pub projection: Projection<'a>,
    /// The cursor, valid for `projection`.
    pub cursor: Cursor,
}

impl<'a> ViewFrame<'a> {
    /// Returns the selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&'a Item> {
        self.projection.item_at(self.cursor)
    }
}
