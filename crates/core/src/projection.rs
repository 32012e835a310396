//! Per-view projections of a snapshot.
//!
//! A projection is a read-only restructuring of the snapshot for one view.
//! Projections borrow the snapshot's items, are recomputed on demand and
//! are deterministic: projecting the same snapshot twice yields equal
//! results.
//!
//! # Examples
//!
//! ```
//! use projhub_core::{ViewKind, dummy, project};
//!
//! let snapshot = dummy::sample_snapshot().unwrap();
//! let board = project(ViewKind::Board, &snapshot);
//!
//! let counts: Vec<_> = board.groups().iter().map(|g| g.len()).collect();
//! assert_eq!(counts, [3, 2, 1, 2]);
//! ```

use chrono::NaiveDate;

use crate::cursor::Cursor;
use crate::item::{Item, Status};
use crate::snapshot::ProjectSnapshot;
use crate::view::ViewKind;

/// Number of cells in a progress bar.
pub const PROGRESS_CELLS: usize = 10;

/// Glyph for a filled progress cell.
pub const FILLED_GLYPH: char = '█';

/// Glyph for an empty progress cell.
pub const EMPTY_GLYPH: char = '░';

/// Label of the roadmap group collecting items without a sprint.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Returns the number of filled cells for a percentage.
///
/// Rounds half up and clamps to `0..=PROGRESS_CELLS`.
///
/// # Examples
///
/// ```
/// use projhub_core::filled_cells;
///
/// assert_eq!(filled_cells(70), 7);
/// assert_eq!(filled_cells(45), 5);
/// assert_eq!(filled_cells(44), 4);
/// assert_eq!(filled_cells(0), 0);
/// assert_eq!(filled_cells(250), 10);
/// ```
#[must_use]
pub fn filled_cells(percent: u8) -> usize {
    let percent = usize::from(percent.min(100));
    ((percent * PROGRESS_CELLS + 50) / 100).min(PROGRESS_CELLS)
}

/// Renders a percentage as a glyph bar of [`PROGRESS_CELLS`] cells.
#[must_use]
pub fn progress_bar(percent: u8) -> String {
    let filled = filled_cells(percent);
    std::iter::repeat_n(FILLED_GLYPH, filled)
        .chain(std::iter::repeat_n(EMPTY_GLYPH, PROGRESS_CELLS - filled))
        .collect()
}

/// What a group collects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// A board column.
    Status(Status),
    /// A named sprint on the roadmap.
    Sprint(String),
    /// Roadmap items without a sprint.
    Unassigned,
}

impl GroupKey {
    /// Returns the group heading.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Status(status) => status.display_name(),
            Self::Sprint(name) => name,
            Self::Unassigned => UNASSIGNED_LABEL,
        }
    }
}

/// An ordered group of items in a grouped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    /// What the group collects.
    pub key: GroupKey,
    /// Items in display order.
    pub items: Vec<&'a Item>,
}

impl<'a> Group<'a> {
    /// Returns the group heading.
    #[must_use]
    pub fn label(&self) -> &str {
        self.key.label()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A view-specific restructuring of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection<'a> {
    /// One group per status column, in column order.
    Board(Vec<Group<'a>>),
    /// All items in insertion order.
    Table(Vec<&'a Item>),
    /// One group per sprint, then unassigned items.
    Roadmap(Vec<Group<'a>>),
}

impl<'a> Projection<'a> {
    /// Returns the view this projection belongs to.
    #[must_use]
    pub const fn view(&self) -> ViewKind {
        match self {
            Self::Board(_) => ViewKind::Board,
            Self::Table(_) => ViewKind::Table,
            Self::Roadmap(_) => ViewKind::Roadmap,
        }
    }

    /// Returns the groups of a grouped view; empty for the table.
    #[must_use]
    pub fn groups(&self) -> &[Group<'a>] {
        match self {
            Self::Board(groups) | Self::Roadmap(groups) => groups,
            Self::Table(_) => &[],
        }
    }

    /// Returns the table rows; empty for grouped views.
    #[must_use]
    pub fn rows(&self) -> &[&'a Item] {
        match self {
            Self::Table(rows) => rows,
            Self::Board(_) | Self::Roadmap(_) => &[],
        }
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Table(rows) => rows.len(),
            Self::Board(groups) | Self::Roadmap(groups) => groups.iter().map(Group::len).sum(),
        }
    }

    /// Returns `true` if the projection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of items in a group; the table is group 0.
    #[must_use]
    pub fn group_len(&self, group: usize) -> Option<usize> {
        match self {
            Self::Table(rows) => (group == 0).then_some(rows.len()),
            Self::Board(groups) | Self::Roadmap(groups) => groups.get(group).map(Group::len),
        }
    }

    /// Returns the item a cursor points at, if the cursor fits this view.
    #[must_use]
    pub fn item_at(&self, cursor: Cursor) -> Option<&'a Item> {
        match (self, cursor) {
            (Self::Table(rows), Cursor::Flat { row }) => rows.get(row).copied(),
            (Self::Board(groups) | Self::Roadmap(groups), Cursor::Grouped { group, offset }) => {
                groups.get(group)?.items.get(offset).copied()
            }
            _ => None,
        }
    }

    /// Returns `true` if the cursor is valid for this projection.
    ///
    /// An empty cursor is valid only when there is nothing to select.
    #[must_use]
    pub fn contains(&self, cursor: Cursor) -> bool {
        match cursor {
            Cursor::Empty => self.is_empty(),
            _ => self.item_at(cursor).is_some(),
        }
    }

    /// Returns the cursor for a `(group, offset)` position, if it exists.
    #[must_use]
    pub fn cursor_at(&self, group: usize, offset: usize) -> Option<Cursor> {
        let cursor = match self {
            Self::Table(_) if group == 0 => Cursor::Flat { row: offset },
            Self::Table(_) => return None,
            Self::Board(_) | Self::Roadmap(_) => Cursor::Grouped { group, offset },
        };
        self.item_at(cursor).map(|_| cursor)
    }

    /// Returns the first selectable position in rendering order.
    ///
    /// Leading empty groups are skipped; an empty projection yields
    /// [`Cursor::Empty`].
    #[must_use]
    pub fn origin(&self) -> Cursor {
        match self {
            Self::Table(rows) if rows.is_empty() => Cursor::Empty,
            Self::Table(_) => Cursor::Flat { row: 0 },
            Self::Board(groups) | Self::Roadmap(groups) => groups
                .iter()
                .position(|g| !g.is_empty())
                .map_or(Cursor::Empty, |group| Cursor::Grouped { group, offset: 0 }),
        }
    }
}

/// Projects a snapshot for a view.
#[must_use]
pub fn project(view: ViewKind, snapshot: &ProjectSnapshot) -> Projection<'_> {
    match view {
        ViewKind::Board => Projection::Board(project_board(snapshot)),
        ViewKind::Table => Projection::Table(project_table(snapshot)),
        ViewKind::Roadmap => Projection::Roadmap(project_roadmap(snapshot)),
    }
}

/// Groups items into the board columns.
///
/// Every column is present, empty or not, and keeps insertion order.
#[must_use]
pub fn project_board(snapshot: &ProjectSnapshot) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = snapshot
        .columns()
        .iter()
        .map(|column| Group {
            key: GroupKey::Status(column.status),
            items: Vec::new(),
        })
        .collect();
    // Columns follow status order, so a status index is its column.
    for item in snapshot.items() {
        if let Some(group) = groups.get_mut(item.status.index()) {
            group.items.push(item);
        }
    }
    groups
}

/// Lists all items in insertion order.
#[must_use]
pub fn project_table(snapshot: &ProjectSnapshot) -> Vec<&Item> {
    snapshot.items().iter().collect()
}

/// Groups items by sprint.
///
/// Declared sprints come first in declared order, including empty ones.
/// Sprints referenced only by items follow in order of first appearance.
/// Items without a sprint are collected last, in a group that exists only
/// when it is non-empty. Each group is sorted by update date, then id.
#[must_use]
pub fn project_roadmap(snapshot: &ProjectSnapshot) -> Vec<Group<'_>> {
    let mut names: Vec<&str> = snapshot.sprints().iter().map(|s| s.name.as_str()).collect();
    for sprint in snapshot.items().iter().filter_map(|item| item.sprint.as_deref()) {
        if !names.contains(&sprint) {
            names.push(sprint);
        }
    }

    let mut groups: Vec<Group<'_>> = names
        .into_iter()
        .map(|name| Group {
            key: GroupKey::Sprint(name.to_string()),
            items: snapshot
                .items()
                .iter()
                .filter(|item| item.sprint.as_deref() == Some(name))
                .collect(),
        })
        .collect();

    let unassigned: Vec<&Item> = snapshot
        .items()
        .iter()
        .filter(|item| item.sprint.is_none())
        .collect();
    if !unassigned.is_empty() {
        groups.push(Group {
            key: GroupKey::Unassigned,
            items: unassigned,
        });
    }

    for group in &mut groups {
        group
            .items
            .sort_by(|a, b| a.updated_at.cmp(&b.updated_at).then_with(|| a.id.cmp(&b.id)));
    }
    groups
}

/// Returns the integer mean of the effective progress of a group's items.
///
/// An empty group averages to 0.
#[must_use]
pub fn average_progress(snapshot: &ProjectSnapshot, group: &Group<'_>) -> u8 {
    if group.is_empty() {
        return 0;
    }
    let total: usize = group
        .items
        .iter()
        .map(|item| usize::from(snapshot.progress_of(item)))
        .sum();
    u8::try_from(total / group.len()).unwrap_or(100)
}

/// Returns the overall roadmap span: earliest sprint start to latest end.
#[must_use]
pub fn timeline_span(snapshot: &ProjectSnapshot) -> Option<(NaiveDate, NaiveDate)> {
    Some((snapshot.timeline_start()?, snapshot.timeline_end()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy;
    use crate::snapshot::Sprint;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn progress_bar_glyphs() {
        insta::assert_snapshot!(progress_bar(70), @"███████░░░");
        insta::assert_snapshot!(progress_bar(0), @"░░░░░░░░░░");
        insta::assert_snapshot!(progress_bar(45), @"█████░░░░░");
        insta::assert_snapshot!(progress_bar(100), @"██████████");
    }

    #[test]
    fn filled_cells_rounds_half_up() {
        assert_eq!(filled_cells(5), 1);
        assert_eq!(filled_cells(4), 0);
        assert_eq!(filled_cells(95), 10);
        assert_eq!(filled_cells(94), 9);
    }

    #[test]
    fn board_keeps_empty_columns() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Done, date(1)),
                Item::new("b", "B", Status::Done, date(2)),
            ],
        )
        .unwrap();
        let board = project(ViewKind::Board, &snapshot);

        let counts: Vec<_> = board.groups().iter().map(Group::len).collect();
        assert_eq!(counts, [0, 0, 0, 2]);
        assert_eq!(board.origin(), Cursor::Grouped { group: 3, offset: 0 });
    }

    #[test]
    fn sample_board_columns() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let board = project_board(&snapshot);

        let labels: Vec<_> = board.iter().map(Group::label).collect();
        assert_eq!(labels, ["Backlog", "In Progress", "Review", "Done"]);
        assert_eq!(ids(&board[0].items), ["#123", "#124", "#125"]);
        assert_eq!(ids(&board[3].items), ["#129", "#130"]);
    }

    #[test]
    fn roadmap_group_order() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Backlog, date(3)),
                Item::new("b", "B", Status::Backlog, date(1)).with_sprint("Extra"),
                Item::new("c", "C", Status::Backlog, date(2)).with_sprint("S1"),
                Item::new("d", "D", Status::Backlog, date(1)).with_sprint("Another"),
            ],
        )
        .unwrap()
        .with_sprints(vec![Sprint::new("S1"), Sprint::new("Empty")])
        .unwrap();

        let roadmap = project_roadmap(&snapshot);
        let labels: Vec<_> = roadmap.iter().map(Group::label).collect();
        assert_eq!(labels, ["S1", "Empty", "Extra", "Another", "Unassigned"]);
        assert!(roadmap[1].is_empty());
        assert_eq!(ids(&roadmap[4].items), ["a"]);
    }

    #[test]
    fn roadmap_files_blank_sprints_under_unassigned() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Backlog, date(1)).with_sprint(""),
                Item::new("b", "B", Status::Backlog, date(2)).with_sprint("  "),
            ],
        )
        .unwrap();
        let roadmap = project_roadmap(&snapshot);
        let labels: Vec<_> = roadmap.iter().map(Group::label).collect();
        assert_eq!(labels, ["Unassigned"]);
        assert_eq!(ids(&roadmap[0].items), ["a", "b"]);
    }

    #[test]
    fn roadmap_omits_empty_unassigned_group() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![Item::new("a", "A", Status::Backlog, date(1)).with_sprint("S1")],
        )
        .unwrap();
        let roadmap = project_roadmap(&snapshot);
        assert_eq!(roadmap.len(), 1);
        assert_eq!(roadmap[0].key, GroupKey::Sprint("S1".to_string()));
    }

    #[test]
    fn roadmap_sorts_by_date_then_id() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("z", "Z", Status::Backlog, date(2)).with_sprint("S1"),
                Item::new("b", "B", Status::Backlog, date(1)).with_sprint("S1"),
                Item::new("a", "A", Status::Backlog, date(2)).with_sprint("S1"),
            ],
        )
        .unwrap();
        let roadmap = project_roadmap(&snapshot);
        assert_eq!(ids(&roadmap[0].items), ["b", "a", "z"]);
    }

    #[test]
    fn sample_roadmap_averages() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let roadmap = project_roadmap(&snapshot);

        assert_eq!(roadmap[0].label(), "Sprint 1");
        assert_eq!(ids(&roadmap[0].items), ["#123", "#126"]);
        assert_eq!(average_progress(&snapshot, &roadmap[0]), 60);
        assert_eq!(roadmap[1].label(), "Sprint 2");
        assert_eq!(ids(&roadmap[1].items), ["#124", "#128"]);
        assert_eq!(average_progress(&snapshot, &roadmap[1]), 20);
    }

    #[test]
    fn average_of_empty_group_is_zero() {
        let snapshot = ProjectSnapshot::empty("p");
        let group = Group {
            key: GroupKey::Unassigned,
            items: Vec::new(),
        };
        assert_eq!(average_progress(&snapshot, &group), 0);
    }

    #[test]
    fn sample_timeline_span() {
        let snapshot = dummy::sample_snapshot().unwrap();
        assert_eq!(timeline_span(&snapshot), Some((date(1), date(31))));
        assert_eq!(timeline_span(&ProjectSnapshot::empty("p")), None);
    }

    #[test]
    fn empty_snapshot_projects_explicitly_empty() {
        let snapshot = ProjectSnapshot::empty("p");
        for view in ViewKind::all() {
            let projection = project(view, &snapshot);
            assert!(projection.is_empty());
            assert_eq!(projection.origin(), Cursor::Empty);
            assert!(projection.contains(Cursor::Empty));
        }
        assert_eq!(project(ViewKind::Board, &snapshot).groups().len(), 4);
        assert!(project(ViewKind::Roadmap, &snapshot).groups().is_empty());
    }

    #[test]
    fn cursor_kind_must_match_view() {
        let snapshot = dummy::sample_snapshot().unwrap();
        let table = project(ViewKind::Table, &snapshot);
        let board = project(ViewKind::Board, &snapshot);

        assert!(table.item_at(Cursor::Grouped { group: 0, offset: 0 }).is_none());
        assert!(board.item_at(Cursor::Flat { row: 0 }).is_none());
        assert_eq!(table.cursor_at(0, 2), Some(Cursor::Flat { row: 2 }));
        assert_eq!(table.cursor_at(1, 0), None);
        assert_eq!(board.cursor_at(2, 1), None);
    }
}
