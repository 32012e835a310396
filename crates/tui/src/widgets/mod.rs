//! Widget components for the projhub TUI.
//!
//! Every widget is a function that renders part of a
//! [`ViewFrame`](projhub_core::ViewFrame) into a buffer. The view widgets
//! return the [`HitRegion`]s of the items they drew, so the application can
//! map a mouse click back to a selection.
//!
//! # Modules
//!
//! - [`header`]: title bar with the view tabs
//! - [`board`]: status columns of item cards
//! - [`card`]: a single item card
//! - [`table`]: the flat item table
//! - [`roadmap`]: sprint groups with progress bars
//! - [`status_bar`]: key hints and the current selection
//! - [`help`]: the keybinding overlay
//! - [`detail`]: the selected item's fields
//!
//! # Color Coding
//!
//! | Priority | Color |
//! |----------|-------|
//! | `High` | Red |
//! | `Medium` | Yellow |
//! | `Low` | Green |
//!
//! # Example
//!
//! ```
//! use projhub_core::{Session, dummy};
//! use projhub_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let session = Session::new(dummy::sample_snapshot().unwrap());
//! let frame = session.frame();
//!
//! let area = Rect::new(0, 0, 100, 24);
//! let mut buf = Buffer::empty(area);
//! let hits = widgets::render_board(frame.projection.groups(), frame.cursor, area, &mut buf);
//! assert_eq!(hits.len(), 8);
//! ```

use projhub_core::{Priority, Status};
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

pub mod board;
pub mod card;
pub mod detail;
pub mod header;
pub mod help;
pub mod roadmap;
pub mod status_bar;
pub mod table;

pub use board::render_board;
pub use card::render_card;
pub use detail::render_detail_overlay;
pub use header::render_header;
pub use help::render_help_overlay;
pub use roadmap::render_roadmap;
pub use status_bar::render_status_bar;
pub use table::render_table;

/// The screen area of one rendered item and the position it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    /// Where the item was drawn.
    pub area: Rect,
    /// Group index; 0 for the table.
    pub group: usize,
    /// Offset within the group, or the table row.
    pub offset: usize,
}

impl HitRegion {
    /// Returns `true` if the screen cell lies inside the region.
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Returns the color used for a priority.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Returns the color used for a status.
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Backlog => Color::Gray,
        Status::InProgress => Color::Blue,
        Status::Review => Color::Magenta,
        Status::Done => Color::Green,
    }
}

/// Returns the index of the first visible entry so that `selected` stays in
/// a window of `visible` entries.
#[must_use]
pub(crate) fn scroll_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(selected) if visible > 0 && selected >= visible => selected + 1 - visible,
        _ => 0,
    }
}
