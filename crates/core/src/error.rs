//! Error types for snapshot construction.
//!
//! Navigation never fails, so the only errors this crate produces come from
//! building a [`ProjectSnapshot`](crate::ProjectSnapshot) out of malformed data.

use chrono::NaiveDate;

/// Errors raised while validating a project snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two items share the same identifier.
    #[error("duplicate item id `{id}`")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// An item has an empty identifier.
    #[error("item at position {position} has an empty id")]
    EmptyId {
        /// Zero-based insertion position of the offending item.
        position: usize,
    },

    /// An item's progress is outside `0..=100`.
    #[error("item `{id}` has progress {percent}%, expected 0-100")]
    ProgressOutOfRange {
        /// The item identifier.
        id: String,
        /// The rejected value.
        percent: i64,
    },

    /// An item's status text is not one of the known statuses.
    #[error("item `{id}` has unknown status `{value}`")]
    UnknownStatus {
        /// The item identifier.
        id: String,
        /// The rejected status text.
        value: String,
    },

    /// An item's priority text is not one of the known priorities.
    #[error("item `{id}` has unknown priority `{value}`")]
    UnknownPriority {
        /// The item identifier.
        id: String,
        /// The rejected priority text.
        value: String,
    },

    /// An item's date could not be parsed as `YYYY-MM-DD`.
    #[error("item `{id}` has invalid date `{value}`, expected YYYY-MM-DD")]
    InvalidDate {
        /// The item identifier.
        id: String,
        /// The rejected date text.
        value: String,
    },

    /// Two declared sprints share the same name.
    #[error("duplicate sprint `{name}`")]
    DuplicateSprint {
        /// The repeated sprint name.
        name: String,
    },

    /// A declared sprint has a blank name.
    #[error("sprint at position {position} has an empty name")]
    EmptySprintName {
        /// Zero-based position in the declared sprint list.
        position: usize,
    },

    /// A sprint date could not be parsed as `YYYY-MM-DD`.
    #[error("sprint `{name}` has invalid date `{value}`, expected YYYY-MM-DD")]
    InvalidSprintDate {
        /// The sprint name.
        name: String,
        /// The rejected date text.
        value: String,
    },

    /// A sprint ends before it starts.
    #[error("sprint `{name}` ends on {end}, before its start on {start}")]
    InvertedSprint {
        /// The sprint name.
        name: String,
        /// Declared first day.
        start: NaiveDate,
        /// Declared last day.
        end: NaiveDate,
    },
}

/// A specialized Result type for snapshot validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
