//! The immutable project snapshot.
//!
//! A [`ProjectSnapshot`] is the single source of truth read by every view.
//! It is validated once at construction and offers no mutation afterwards.
//! [`SnapshotFile`] is its loosely-typed on-disk form.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::item::{Item, Priority, Status};

/// Date format used by snapshot files.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A board column definition.
///
/// Membership is implicit: a column holds every item whose status matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// The status this column collects.
    pub status: Status,
}

impl Column {
    /// Returns the display name of the column.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.status.display_name()
    }
}

/// A declared sprint (timebox) for the roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    /// Unique sprint name, matched against [`Item::sprint`].
    pub name: String,
    /// First day of the sprint.
    pub start: Option<NaiveDate>,
    /// Last day of the sprint.
    pub end: Option<NaiveDate>,
}

impl Sprint {
    /// Creates a sprint without dates.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
        }
    }

    /// Sets the start and end dates.
    #[must_use]
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}

/// Progress assumed for items that carry no explicit percentage.
///
/// # Examples
///
/// ```
/// use projhub_core::{ProgressDefaults, Status};
///
/// let defaults = ProgressDefaults::default();
/// assert_eq!(defaults.for_status(Status::Done), 100);
/// assert_eq!(defaults.for_status(Status::Backlog), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressDefaults {
    /// Percentage for backlog items.
    pub backlog: u8,
    /// Percentage for in-progress items.
    pub in_progress: u8,
    /// Percentage for items under review.
    pub review: u8,
    /// Percentage for done items.
    pub done: u8,
}

impl Default for ProgressDefaults {
    fn default() -> Self {
        Self {
            backlog: 20,
            in_progress: 60,
            review: 80,
            done: 100,
        }
    }
}

impl ProgressDefaults {
    /// Returns the default percentage for a status, capped at 100.
    #[must_use]
    pub fn for_status(&self, status: Status) -> u8 {
        self.raw(status).min(100)
    }

    /// Returns the first status whose default exceeds 100, if any.
    #[must_use]
    pub fn out_of_range(&self) -> Option<(Status, u8)> {
        Status::all().into_iter().find_map(|status| {
            let raw = self.raw(status);
            (raw > 100).then_some((status, raw))
        })
    }

    const fn raw(&self, status: Status) -> u8 {
        match status {
            Status::Backlog => self.backlog,
            Status::InProgress => self.in_progress,
            Status::Review => self.review,
            Status::Done => self.done,
        }
    }
}

/// The validated, read-only project dataset.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use projhub_core::{Item, ProjectSnapshot, Status, ValidationError};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let snapshot = ProjectSnapshot::new(
///     "Demo",
///     vec![Item::new("#1", "First", Status::Backlog, date)],
/// )
/// .unwrap();
/// assert_eq!(snapshot.len(), 1);
///
/// let err = ProjectSnapshot::new(
///     "Demo",
///     vec![
///         Item::new("#1", "First", Status::Backlog, date),
///         Item::new("#1", "Again", Status::Done, date),
///     ],
/// )
/// .unwrap_err();
/// assert_eq!(err, ValidationError::DuplicateId { id: "#1".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    name: String,
    items: Vec<Item>,
    columns: [Column; 4],
    sprints: Vec<Sprint>,
    progress_defaults: ProgressDefaults,
}

impl ProjectSnapshot {
    /// Builds a snapshot from items in insertion order.
    ///
    /// A blank sprint name counts as no sprint.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if an id is empty or repeated, or if
    /// an explicit progress exceeds 100.
    pub fn new(name: impl Into<String>, mut items: Vec<Item>) -> Result<Self> {
        for item in &mut items {
            if item.sprint.as_deref().is_some_and(|s| s.trim().is_empty()) {
                item.sprint = None;
            }
        }

        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(ValidationError::EmptyId { position });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    id: item.id.clone(),
                });
            }
            match item.progress {
                Some(percent) if percent > 100 => {
                    return Err(ValidationError::ProgressOutOfRange {
                        id: item.id.clone(),
                        percent: i64::from(percent),
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            name: name.into(),
            items,
            columns: Status::all().map(|status| Column { status }),
            sprints: Vec::new(),
            progress_defaults: ProgressDefaults::default(),
        })
    }

    /// Creates a snapshot with no items.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            columns: Status::all().map(|status| Column { status }),
            sprints: Vec::new(),
            progress_defaults: ProgressDefaults::default(),
        }
    }

    /// Declares the sprints shown on the roadmap, in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a sprint name is blank or repeated,
    /// or if a sprint ends before it starts.
    pub fn with_sprints(mut self, sprints: Vec<Sprint>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(sprints.len());
        for (position, sprint) in sprints.iter().enumerate() {
            if sprint.name.trim().is_empty() {
                return Err(ValidationError::EmptySprintName { position });
            }
            if !seen.insert(sprint.name.as_str()) {
                return Err(ValidationError::DuplicateSprint {
                    name: sprint.name.clone(),
                });
            }
            match (sprint.start, sprint.end) {
                (Some(start), Some(end)) if start > end => {
                    return Err(ValidationError::InvertedSprint {
                        name: sprint.name.clone(),
                        start,
                        end,
                    });
                }
                _ => {}
            }
        }
        self.sprints = sprints;
        Ok(self)
    }

    /// Replaces the progress assumed for items without explicit progress.
    #[must_use]
    pub fn with_progress_defaults(mut self, defaults: ProgressDefaults) -> Self {
        self.progress_defaults = defaults;
        self
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the board columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the declared sprints in display order.
    #[must_use]
    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// Returns a declared sprint by name.
    #[must_use]
    pub fn sprint(&self, name: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.name == name)
    }

    /// Returns the progress defaults.
    #[must_use]
    pub fn progress_defaults(&self) -> &ProgressDefaults {
        &self.progress_defaults
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the snapshot holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the progress shown for an item: its explicit percentage,
    /// or the default for its status.
    #[must_use]
    pub fn progress_of(&self, item: &Item) -> u8 {
        item.progress
            .unwrap_or_else(|| self.progress_defaults.for_status(item.status))
    }

    /// Returns the earliest declared sprint start.
    #[must_use]
    pub fn timeline_start(&self) -> Option<NaiveDate> {
        self.sprints.iter().filter_map(|s| s.start).min()
    }

    /// Returns the latest declared sprint end.
    #[must_use]
    pub fn timeline_end(&self) -> Option<NaiveDate> {
        self.sprints.iter().filter_map(|s| s.end).max()
    }
}

/// The on-disk form of a snapshot, with enums and dates as plain text.
///
/// Convert with [`ProjectSnapshot::try_from`] to validate.
///
/// # Examples
///
/// ```
/// use projhub_core::{ProjectSnapshot, SnapshotFile};
///
/// let file: SnapshotFile = serde_json::from_str(r##"{
///     "name": "Demo",
///     "items": [
///         { "id": "#1", "title": "Write docs", "status": "In Progress", "updated_at": "2024-12-01" }
///     ]
/// }"##).unwrap();
///
/// let snapshot = ProjectSnapshot::try_from(file).unwrap();
/// assert_eq!(snapshot.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Declared sprints in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sprints: Vec<SprintRecord>,
    /// Items in insertion order.
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One sprint as stored in a [`SnapshotFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintRecord {
    /// Sprint name.
    pub name: String,
    /// First day as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Last day as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One item as stored in a [`SnapshotFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item identifier.
    pub id: String,
    /// Item title.
    #[serde(default)]
    pub title: String,
    /// Status text, e.g. `"In Progress"`.
    pub status: String,
    /// Assignee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Priority text; defaults to medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Last update date as `YYYY-MM-DD`.
    pub updated_at: String,
    /// Sprint name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
    /// Explicit progress percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self> {
        let status = record
            .status
            .parse::<Status>()
            .map_err(|value| ValidationError::UnknownStatus {
                id: record.id.clone(),
                value,
            })?;

        let priority = match record.priority.as_deref() {
            Some(text) => {
                text.parse::<Priority>()
                    .map_err(|value| ValidationError::UnknownPriority {
                        id: record.id.clone(),
                        value,
                    })?
            }
            None => Priority::default(),
        };

        let updated_at = NaiveDate::parse_from_str(record.updated_at.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate {
                id: record.id.clone(),
                value: record.updated_at.clone(),
            })?;

        let progress = match record.progress {
            Some(percent) => Some(u8::try_from(percent).ok().filter(|p| *p <= 100).ok_or(
                ValidationError::ProgressOutOfRange {
                    id: record.id.clone(),
                    percent,
                },
            )?),
            None => None,
        };

        Ok(Self {
            id: record.id,
            title: record.title,
            status,
            assignee: record.assignee,
            priority,
            updated_at,
            sprint: record.sprint,
            progress,
        })
    }
}

impl TryFrom<SprintRecord> for Sprint {
    type Error = ValidationError;

    fn try_from(record: SprintRecord) -> Result<Self> {
        let start = parse_sprint_date(&record.name, record.start)?;
        let end = parse_sprint_date(&record.name, record.end)?;
        Ok(Self {
            name: record.name,
            start,
            end,
        })
    }
}

fn parse_sprint_date(name: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    let Some(text) = value else {
        return Ok(None);
    };
    match NaiveDate::parse_from_str(text.trim(), DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(_) => Err(ValidationError::InvalidSprintDate {
            name: name.to_string(),
            value: text,
        }),
    }
}

impl TryFrom<SnapshotFile> for ProjectSnapshot {
    type Error = ValidationError;

    fn try_from(file: SnapshotFile) -> Result<Self> {
        let items = file
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;
        let sprints = file
            .sprints
            .into_iter()
            .map(Sprint::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::new(file.name, items)?.with_sprints(sprints)
    }
}

impl From<&Sprint> for SprintRecord {
    fn from(sprint: &Sprint) -> Self {
        let format = |date: NaiveDate| date.format(DATE_FORMAT).to_string();
        Self {
            name: sprint.name.clone(),
            start: sprint.start.map(format),
            end: sprint.end.map(format),
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            status: item.status.display_name().to_string(),
            assignee: item.assignee.clone(),
            priority: Some(item.priority.display_name().to_string()),
            updated_at: item.updated_at.format(DATE_FORMAT).to_string(),
            sprint: item.sprint.clone(),
            progress: item.progress.map(i64::from),
        }
    }
}

impl From<&ProjectSnapshot> for SnapshotFile {
    fn from(snapshot: &ProjectSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            sprints: snapshot.sprints.iter().map(SprintRecord::from).collect(),
            items: snapshot.items.iter().map(ItemRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn record(id: &str, status: &str) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            title: format!("Item {id}"),
            status: status.to_string(),
            updated_at: "2024-12-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn columns_keep_display_order_regardless_of_items() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Done, date(1)),
                Item::new("b", "B", Status::Backlog, date(1)),
            ],
        )
        .unwrap();

        let names: Vec<_> = snapshot.columns().iter().map(Column::name).collect();
        assert_eq!(names, ["Backlog", "In Progress", "Review", "Done"]);
    }

    #[test]
    fn rejects_progress_above_hundred() {
        let err = ProjectSnapshot::new(
            "p",
            vec![Item::new("a", "A", Status::Done, date(1)).with_progress(101)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ProgressOutOfRange {
                id: "a".to_string(),
                percent: 101
            }
        );
    }

    #[test]
    fn accepts_progress_bounds() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Done, date(1)).with_progress(0),
                Item::new("b", "B", Status::Done, date(1)).with_progress(100),
            ],
        );
        assert!(snapshot.is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        let err = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Done, date(1)),
                Item::new("  ", "B", Status::Done, date(1)),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::EmptyId { position: 1 });
    }

    #[test]
    fn rejects_duplicate_sprints() {
        let err = ProjectSnapshot::empty("p")
            .with_sprints(vec![Sprint::new("S1"), Sprint::new("S1")])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateSprint {
                name: "S1".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_sprint_name() {
        let err = ProjectSnapshot::empty("p")
            .with_sprints(vec![Sprint::new("S1"), Sprint::new("   ")])
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptySprintName { position: 1 });
    }

    #[test]
    fn rejects_sprint_ending_before_start() {
        let err = ProjectSnapshot::empty("p")
            .with_sprints(vec![Sprint::new("S1").with_dates(date(15), date(1))])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvertedSprint {
                name: "S1".to_string(),
                start: date(15),
                end: date(1),
            }
        );

        let one_day = ProjectSnapshot::empty("p")
            .with_sprints(vec![Sprint::new("S1").with_dates(date(3), date(3))]);
        assert!(one_day.is_ok());
    }

    #[test]
    fn blank_item_sprint_means_unassigned() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Done, date(1)).with_sprint(""),
                Item::new("b", "B", Status::Done, date(1)).with_sprint("  "),
                Item::new("c", "C", Status::Done, date(1)).with_sprint("S1"),
            ],
        )
        .unwrap();

        let sprints: Vec<_> = snapshot.items().iter().map(|i| i.sprint.as_deref()).collect();
        assert_eq!(sprints, [None, None, Some("S1")]);
    }

    #[test]
    fn progress_of_falls_back_to_status_default() {
        let snapshot = ProjectSnapshot::new(
            "p",
            vec![
                Item::new("a", "A", Status::Review, date(1)),
                Item::new("b", "B", Status::Review, date(1)).with_progress(10),
            ],
        )
        .unwrap();

        assert_eq!(snapshot.progress_of(&snapshot.items()[0]), 80);
        assert_eq!(snapshot.progress_of(&snapshot.items()[1]), 10);
    }

    #[test]
    fn custom_progress_defaults_apply() {
        let snapshot = ProjectSnapshot::new("p", vec![Item::new("a", "A", Status::Backlog, date(1))])
            .unwrap()
            .with_progress_defaults(ProgressDefaults {
                backlog: 0,
                ..Default::default()
            });
        assert_eq!(snapshot.progress_of(&snapshot.items()[0]), 0);
    }

    #[test]
    fn progress_defaults_out_of_range() {
        let defaults = ProgressDefaults {
            review: 120,
            ..Default::default()
        };
        assert_eq!(defaults.out_of_range(), Some((Status::Review, 120)));
        assert_eq!(defaults.for_status(Status::Review), 100);
        assert_eq!(ProgressDefaults::default().out_of_range(), None);
    }

    #[test]
    fn timeline_span_covers_declared_sprints() {
        let snapshot = ProjectSnapshot::empty("p")
            .with_sprints(vec![
                Sprint::new("S1").with_dates(date(1), date(15)),
                Sprint::new("S2").with_dates(date(16), date(31)),
                Sprint::new("Later"),
            ])
            .unwrap();
        assert_eq!(snapshot.timeline_start(), Some(date(1)));
        assert_eq!(snapshot.timeline_end(), Some(date(31)));
    }

    #[test]
    fn file_rejects_unknown_status() {
        let file = SnapshotFile {
            name: "p".to_string(),
            items: vec![record("#1", "Blocked")],
            ..Default::default()
        };
        assert_eq!(
            ProjectSnapshot::try_from(file).unwrap_err(),
            ValidationError::UnknownStatus {
                id: "#1".to_string(),
                value: "Blocked".to_string()
            }
        );
    }

    #[test]
    fn file_rejects_unknown_priority() {
        let mut item = record("#1", "Done");
        item.priority = Some("Urgent".to_string());
        let file = SnapshotFile {
            items: vec![item],
            ..Default::default()
        };
        assert!(matches!(
            ProjectSnapshot::try_from(file),
            Err(ValidationError::UnknownPriority { .. })
        ));
    }

    #[test]
    fn file_rejects_bad_date() {
        let mut item = record("#1", "Done");
        item.updated_at = "12/01/2024".to_string();
        let file = SnapshotFile {
            items: vec![item],
            ..Default::default()
        };
        assert!(matches!(
            ProjectSnapshot::try_from(file),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn file_blank_sprint_means_unassigned() {
        let mut item = record("#1", "Done");
        item.sprint = Some(" ".to_string());
        let file = SnapshotFile {
            items: vec![item],
            ..Default::default()
        };
        let snapshot = ProjectSnapshot::try_from(file).unwrap();
        assert_eq!(snapshot.items()[0].sprint, None);
    }

    #[test]
    fn file_rejects_bad_sprint_date() {
        let file = SnapshotFile {
            sprints: vec![SprintRecord {
                name: "S1".to_string(),
                start: Some("2024-12-01".to_string()),
                end: Some("mid-december".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(
            ProjectSnapshot::try_from(file).unwrap_err(),
            ValidationError::InvalidSprintDate {
                name: "S1".to_string(),
                value: "mid-december".to_string()
            }
        );
    }

    #[test]
    fn file_rejects_inverted_sprint() {
        let file = SnapshotFile {
            sprints: vec![SprintRecord {
                name: "S1".to_string(),
                start: Some("2024-12-15".to_string()),
                end: Some("2024-12-01".to_string()),
            }],
            ..Default::default()
        };
        assert!(matches!(
            ProjectSnapshot::try_from(file),
            Err(ValidationError::InvertedSprint { .. })
        ));
    }

    #[test]
    fn file_rejects_negative_progress() {
        let mut item = record("#1", "Done");
        item.progress = Some(-5);
        let file = SnapshotFile {
            items: vec![item],
            ..Default::default()
        };
        assert_eq!(
            ProjectSnapshot::try_from(file).unwrap_err(),
            ValidationError::ProgressOutOfRange {
                id: "#1".to_string(),
                percent: -5
            }
        );
    }

    #[test]
    fn file_conversion_preserves_snapshot() {
        let original = ProjectSnapshot::new(
            "Demo",
            vec![
                Item::new("#1", "One", Status::InProgress, date(3))
                    .with_assignee("@sato")
                    .with_priority(Priority::High)
                    .with_sprint("S1")
                    .with_progress(40),
                Item::new("#2", "Two", Status::Done, date(4)),
            ],
        )
        .unwrap()
        .with_sprints(vec![Sprint::new("S1").with_dates(date(1), date(15))])
        .unwrap();

        let file = SnapshotFile::from(&original);
        assert_eq!(file.items[0].status, "In Progress");
        assert_eq!(file.items[0].updated_at, "2024-12-03");
        assert_eq!(file.sprints[0].start.as_deref(), Some("2024-12-01"));

        let restored = ProjectSnapshot::try_from(file).unwrap();
        assert_eq!(restored, original);
    }
}
