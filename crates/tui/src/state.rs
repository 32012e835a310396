//! Application state management.
//!
//! The view and cursor live in the core [`Session`]; this module adds the
//! state only the terminal front end cares about.

use projhub_core::{Message, Session};

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Snapshot plus view state.
    pub session: Session,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Whether the detail overlay for the selected item is visible.
    pub detail_visible: bool,
}

impl AppState {
    /// Creates a new application state around `session`, help hidden.
    ///
    /// # Examples
    ///
    /// ```
    /// use projhub_core::{ProjectSnapshot, Session};
    /// use projhub_tui::AppState;
    ///
    /// let state = AppState::new(Session::new(ProjectSnapshot::empty("demo")));
    /// assert!(!state.help_visible);
    /// ```
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            help_visible: false,
            detail_visible: false,
        }
    }

    /// Toggles the help overlay visibility.
    ///
    /// While help is shown, other interactions are blocked until it is
    /// dismissed.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Opens the detail overlay, or closes it if it is open.
    ///
    /// The overlay only opens while an item is selected. Returns `true`
    /// if it is visible afterwards.
    pub fn toggle_detail(&mut self) -> bool {
        self.detail_visible =
            !self.detail_visible && self.session.frame().selected_item().is_some();
        self.detail_visible
    }

    /// Dismisses the detail overlay if it is visible.
    ///
    /// Returns `true` if the overlay was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_detail(&mut self) -> bool {
        std::mem::take(&mut self.detail_visible)
    }

    /// Selects the first item of the group holding the cursor.
    ///
    /// Returns `true` if the cursor moved.
    pub fn jump_to_first(&mut self) -> bool {
        self.jump_within_group(|_| Some(0))
    }

    /// Selects the last item of the group holding the cursor.
    ///
    /// Returns `true` if the cursor moved.
    pub fn jump_to_last(&mut self) -> bool {
        self.jump_within_group(|len| len.checked_sub(1))
    }

    fn jump_within_group(&mut self, target: impl FnOnce(usize) -> Option<usize>) -> bool {
        let frame = self.session.frame();
        let Some((group, _)) = frame.cursor.position() else {
            return false;
        };
        let Some(offset) = frame.projection.group_len(group).and_then(target) else {
            return false;
        };
        self.session.apply(&Message::SelectAt { group, offset })
    }

    /// Forwards a navigation message to the session.
    ///
    /// Returns `true` if the view or the cursor changed.
    pub fn navigate(&mut self, message: &Message) -> bool {
        self.session.apply(message)
    }
}
