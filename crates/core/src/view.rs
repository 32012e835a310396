//! View kinds and cursor directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three ways to look at a snapshot.
///
/// # Examples
///
/// ```
/// use projhub_core::ViewKind;
///
/// assert_eq!(ViewKind::default(), ViewKind::Board);
/// assert_eq!(ViewKind::from_shortcut('3'), Some(ViewKind::Roadmap));
/// assert_eq!("table".parse::<ViewKind>(), Ok(ViewKind::Table));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Cards grouped into status columns.
    #[default]
    Board,
    /// Flat list with tabular fields.
    Table,
    /// Items grouped by sprint with progress bars.
    Roadmap,
}

impl ViewKind {
    /// Returns all views in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Board, Self::Table, Self::Roadmap]
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Board => "Board",
            Self::Table => "Table",
            Self::Roadmap => "Roadmap",
        }
    }

    /// Returns the zero-based tab index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Board => 0,
            Self::Table => 1,
            Self::Roadmap => 2,
        }
    }

    /// Returns the numeric key that switches to this view.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Board => '1',
            Self::Table => '2',
            Self::Roadmap => '3',
        }
    }

    /// Returns the view bound to a numeric key.
    #[must_use]
    pub const fn from_shortcut(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Board),
            '2' => Some(Self::Table),
            '3' => Some(Self::Roadmap),
            _ => None,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "board" => Ok(Self::Board),
            "table" => Ok(Self::Table),
            "roadmap" => Ok(Self::Roadmap),
            _ => Err(format!(
                "unknown view `{s}`, expected one of: board, table, roadmap"
            )),
        }
    }
}

/// A cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Previous item in the group.
    Up,
    /// Next item in the group.
    Down,
    /// Previous group.
    Left,
    /// Next group.
    Right,
}

impl Direction {
    /// Returns `true` for movements between groups.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}
