//! Sample data for demonstration and tests.
//!
//! # Examples
//!
//! ```
//! use projhub_core::dummy::sample_snapshot;
//!
//! let snapshot = sample_snapshot().unwrap();
//! assert_eq!(snapshot.len(), 8);
//! assert_eq!(snapshot.sprints().len(), 2);
//! ```

use chrono::NaiveDate;

use crate::error::Result;
use crate::item::{Item, Priority, Status};
use crate::snapshot::{ProjectSnapshot, Sprint};

/// Name of the sample project.
pub const SAMPLE_PROJECT: &str = "Web App v2.0";

fn december(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, day).unwrap_or(NaiveDate::MIN)
}

fn november(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).unwrap_or(NaiveDate::MIN)
}

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("#123", "User authentication", Status::Backlog, december(1))
            .with_assignee("@tanaka")
            .with_priority(Priority::High)
            .with_sprint("Sprint 1")
            .with_progress(50),
        Item::new("#124", "API integration", Status::Backlog, december(2))
            .with_assignee("@sato")
            .with_sprint("Sprint 2")
            .with_progress(0),
        Item::new("#125", "Update documentation", Status::Backlog, december(3))
            .with_assignee("@yamada")
            .with_priority(Priority::Low),
        Item::new("#126", "Implement TUI design", Status::InProgress, december(5))
            .with_assignee("@tanaka")
            .with_priority(Priority::High)
            .with_sprint("Sprint 1")
            .with_progress(70),
        Item::new("#127", "Key binding settings", Status::InProgress, december(6))
            .with_assignee("@yamada")
            .with_priority(Priority::Low),
        Item::new("#128", "Add test code", Status::Review, december(4))
            .with_assignee("@sato")
            .with_sprint("Sprint 2")
            .with_progress(40),
        Item::new("#129", "Initial setup", Status::Done, november(28)).with_assignee("@tanaka"),
        Item::new("#130", "Write README", Status::Done, november(30))
            .with_assignee("@sato")
            .with_priority(Priority::Low),
    ]
}

fn sample_sprints() -> Vec<Sprint> {
    vec![
        Sprint::new("Sprint 1").with_dates(december(1), december(15)),
        Sprint::new("Sprint 2").with_dates(december(16), december(31)),
    ]
}

/// Builds the sample project: eight items spread over the four columns
/// (3 / 2 / 1 / 2) and two sprints in December 2024.
///
/// # Errors
///
/// Returns a [`ValidationError`](crate::ValidationError) only if the
/// sample data itself is inconsistent.
pub fn sample_snapshot() -> Result<ProjectSnapshot> {
    ProjectSnapshot::new(SAMPLE_PROJECT, sample_items())?.with_sprints(sample_sprints())
}

/// Builds the five-row table sample (`#123`, `#124`, `#126`, `#127`, `#128`).
///
/// # Errors
///
/// Returns a [`ValidationError`](crate::ValidationError) only if the
/// sample data itself is inconsistent.
pub fn table_snapshot() -> Result<ProjectSnapshot> {
    let items = sample_items()
        .into_iter()
        .filter(|item| matches!(item.id.as_str(), "#123" | "#124" | "#126" | "#127" | "#128"))
        .collect();
    ProjectSnapshot::new(SAMPLE_PROJECT, items)?.with_sprints(sample_sprints())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_distribution() {
        let snapshot = sample_snapshot().unwrap();
        for (status, expected) in Status::all().into_iter().zip([3, 2, 1, 2]) {
            let count = snapshot.items().iter().filter(|i| i.status == status).count();
            assert_eq!(count, expected, "{status}");
        }
    }

    #[test]
    fn table_sample_has_five_rows() {
        let snapshot = table_snapshot().unwrap();
        let ids: Vec<_> = snapshot.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["#123", "#124", "#126", "#127", "#128"]);
    }

    #[test]
    fn sample_is_deterministic() {
        assert_eq!(sample_snapshot().unwrap(), sample_snapshot().unwrap());
    }
}
