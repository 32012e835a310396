//! Item types for the project snapshot.
//!
//! This module defines the work item and the two closed enumerations it
//! carries: the workflow [`Status`] and the [`Priority`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an item, e.g. an issue number like `#123`.
pub type ItemId = String;

/// Normalizes enum text for lenient matching: lowercase, no separators.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The workflow status of an item.
///
/// Each status corresponds to exactly one board column. The declaration
/// order is the column display order.
///
/// # Examples
///
/// ```
/// use projhub_core::Status;
///
/// assert_eq!(Status::InProgress.display_name(), "In Progress");
/// assert_eq!("in_progress".parse::<Status>(), Ok(Status::InProgress));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not started.
    #[default]
    Backlog,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl Status {
    /// Returns all statuses in column display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use projhub_core::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 4);
    /// assert_eq!(all[0], Status::Backlog);
    /// assert_eq!(all[3], Status::Done);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Backlog, Self::InProgress, Self::Review, Self::Done]
    }

    /// Returns the human-readable column name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the column index of this status (0-3).
    ///
    /// # Examples
    ///
    /// ```
    /// use projhub_core::Status;
    ///
    /// assert_eq!(Status::Backlog.index(), 0);
    /// assert_eq!(Status::Done.index(), 3);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Parses a status, ignoring case, spaces, underscores and hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "backlog" => Ok(Self::Backlog),
            "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(s.to_string()),
        }
    }
}

/// The priority of an item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Should be handled first.
    High,
}

impl Priority {
    /// Returns the human-readable priority label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(s.to_string()),
        }
    }
}

/// One trackable unit of work.
///
/// Items are plain data; the invariants (unique ids, progress within
/// `0..=100`) are enforced when they are assembled into a
/// [`ProjectSnapshot`](crate::ProjectSnapshot).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use projhub_core::{Item, Priority, Status};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let item = Item::new("#123", "User authentication", Status::Backlog, date)
///     .with_assignee("@tanaka")
///     .with_priority(Priority::High)
///     .with_sprint("Sprint 1")
///     .with_progress(50);
///
/// assert_eq!(item.id, "#123");
/// assert_eq!(item.progress, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Short summary.
    pub title: String,
    /// Workflow status, which decides the board column.
    pub status: Status,
    /// Identity of the assignee, if any.
    pub assignee: Option<String>,
    /// Priority of the item.
    pub priority: Priority,
    /// Date of the last update.
    pub updated_at: NaiveDate,
    /// Name of the sprint the item is planned in, if any.
    pub sprint: Option<String>,
    /// Explicit completion percentage, if known.
    pub progress: Option<u8>,
}

impl Item {
    /// Creates an unassigned, medium-priority item without sprint or progress.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        status: Status,
        updated_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            assignee: None,
            priority: Priority::default(),
            updated_at,
            sprint: None,
            progress: None,
        }
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the sprint.
    #[must_use]
    pub fn with_sprint(mut self, sprint: impl Into<String>) -> Self {
        self.sprint = Some(sprint.into());
        self
    }

    /// Sets the explicit progress percentage.
    #[must_use]
    pub fn with_progress(mut self, percent: u8) -> Self {
        self.progress = Some(percent);
        self
    }
}
