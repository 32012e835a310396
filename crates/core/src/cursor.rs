//! The selection cursor.

/// The current selection within the active view.
///
/// Grouped views (board, roadmap) address an item by group and offset; the
/// table addresses it by row. A view with no items has an empty cursor.
///
/// # Examples
///
/// ```
/// use projhub_core::Cursor;
///
/// assert_eq!(Cursor::Flat { row: 4 }.position(), Some((0, 4)));
/// assert_eq!(Cursor::Grouped { group: 2, offset: 1 }.position(), Some((2, 1)));
/// assert_eq!(Cursor::Empty.position(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Nothing to select.
    #[default]
    Empty,
    /// An item within a group of a grouped view.
    Grouped {
        /// Group index in rendering order.
        group: usize,
        /// Item index within the group.
        offset: usize,
    },
    /// A row of the table.
    Flat {
        /// Row index.
        row: usize,
    },
}

impl Cursor {
    /// Returns `true` if nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the uniform `(group, offset)` pair; the table is group 0.
    #[must_use]
    pub const fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Empty => None,
            Self::Grouped { group, offset } => Some((group, offset)),
            Self::Flat { row } => Some((0, row)),
        }
    }
}
