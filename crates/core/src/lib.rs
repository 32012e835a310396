//! Core model for projhub.
//!
//! This crate holds everything that does not touch the terminal: the
//! validated project snapshot, the per-view projections and the view
//! state that tracks the active view and its cursor.
//!
//! # Overview
//!
//! - [`item`]: work items, statuses and priorities
//! - [`snapshot`]: the immutable [`ProjectSnapshot`] and its file form
//! - [`projection`]: board, table and roadmap projections
//! - [`view_state`]: the active view and cursor, driven by [`Message`]s
//! - [`session`]: a snapshot bundled with its view state
//! - [`error`]: validation errors
//!
//! # Examples
//!
//! ```
//! use projhub_core::{Cursor, Direction, Message, Session, dummy};
//!
//! let mut session = Session::new(dummy::sample_snapshot().unwrap());
//! for _ in 0..4 {
//!     session.apply(&Message::MoveCursor(Direction::Right));
//! }
//! assert_eq!(session.frame().cursor, Cursor::Grouped { group: 3, offset: 0 });
//! ```

pub mod cursor;
pub mod dummy;
pub mod error;
pub mod item;
pub mod message;
pub mod projection;
pub mod session;
pub mod snapshot;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod testing;

pub use cursor::Cursor;
pub use error::{Result, ValidationError};
pub use item::{Item, ItemId, Priority, Status};
pub use message::Message;
pub use projection::{
    EMPTY_GLYPH, FILLED_GLYPH, Group, GroupKey, PROGRESS_CELLS, Projection, UNASSIGNED_LABEL,
    average_progress, filled_cells, progress_bar, project, project_board, project_roadmap,
    project_table, timeline_span,
};
pub use session::{Session, ViewFrame};
pub use snapshot::{
    Column, ItemRecord, ProgressDefaults, ProjectSnapshot, SnapshotFile, Sprint, SprintRecord,
};
pub use view::{Direction, ViewKind};
pub use view_state::ViewState;
