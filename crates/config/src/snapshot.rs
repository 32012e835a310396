//! Snapshot files.
//!
//! A snapshot file is a JSON5 or JSON document in the [`SnapshotFile`]
//! shape. Loading validates it into a [`ProjectSnapshot`].
//!
//! ```json5
//! {
//!   name: "Web App v2.0",
//!   sprints: [{ name: "Sprint 1", start: "2024-12-01", end: "2024-12-15" }],
//!   items: [
//!     { id: "#123", title: "User authentication", status: "Backlog",
//!       assignee: "@tanaka", priority: "High", updated_at: "2024-12-01",
//!       sprint: "Sprint 1", progress: 50 },
//!   ],
//! }
//! ```

use std::path::Path;

use projhub_core::{ProgressDefaults, ProjectSnapshot, SnapshotFile};
use tracing::info;

use crate::error::{ConfigError, Result};
use crate::persistence::{read_config_file, write_config_file};

/// Loads and validates a snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or
/// [`ConfigError::InvalidSnapshot`] if its content is inconsistent.
pub fn load_snapshot(path: impl AsRef<Path>, defaults: ProgressDefaults) -> Result<ProjectSnapshot> {
    let path = path.as_ref();
    let file: SnapshotFile = read_config_file(path)?;
    let snapshot = ProjectSnapshot::try_from(file)
        .map_err(|source| ConfigError::InvalidSnapshot {
            path: path.to_path_buf(),
            source,
        })?
        .with_progress_defaults(defaults);

    info!(
        path = %path.display(),
        items = snapshot.len(),
        sprints = snapshot.sprints().len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Writes a snapshot as a JSON snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_snapshot(path: impl AsRef<Path>, snapshot: &ProjectSnapshot) -> Result<()> {
    write_config_file(path, &SnapshotFile::from(snapshot))
}
