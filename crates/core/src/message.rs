//! Input messages.
//!
//! Every interaction is expressed as a [`Message`]. The input adapter maps
//! keys and mouse events to messages; the view state consumes the view and
//! cursor ones and the application handles the rest.

use serde::{Deserialize, Serialize};

use crate::view::{Direction, ViewKind};

/// A user action.
///
/// # Examples
///
/// ```
/// use projhub_core::{Direction, Message, ViewKind};
///
/// assert!(Message::MoveCursor(Direction::Down).is_navigation());
/// assert!(Message::SwitchView(ViewKind::Table).is_navigation());
/// assert!(Message::Quit.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Activate a view.
    SwitchView(ViewKind),
    /// Move the cursor one step.
    MoveCursor(Direction),
    /// Select a position of the active view directly.
    SelectAt {
        /// Group index; always 0 for the table.
        group: usize,
        /// Offset within the group, or the table row.
        offset: usize,
    },
    /// Mouse click at screen coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Select the first item of the group holding the cursor.
    JumpToFirst,
    /// Select the last item of the group holding the cursor.
    JumpToLast,
    /// Show or hide the details of the selected item.
    ToggleDetail,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Close the topmost overlay.
    Escape,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if the message is handled by the view state.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::SwitchView(_) | Self::MoveCursor(_) | Self::SelectAt { .. }
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_detection() {
        assert!(Message::SelectAt { group: 0, offset: 0 }.is_navigation());
        assert!(!Message::ClickAt { column: 1, row: 1 }.is_navigation());
        assert!(!Message::ToggleHelp.is_navigation());
        assert!(!Message::ToggleDetail.is_navigation());
        // Jumps are resolved to a selection by the application.
        assert!(!Message::JumpToFirst.is_navigation());
        assert!(!Message::JumpToLast.is_navigation());
        assert!(!Message::Escape.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::MoveCursor(Direction::Up).is_terminating());
    }

    #[test]
    fn json_format() {
        let json = serde_json::to_string(&Message::SwitchView(ViewKind::Roadmap)).expect("serialize");
        assert_eq!(json, r#"{"switch_view":"roadmap"}"#);
        let json = serde_json::to_string(&Message::JumpToLast).expect("serialize");
        assert_eq!(json, r#""jump_to_last""#);
    }
}
