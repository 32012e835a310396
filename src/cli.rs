//! Command-line arguments and startup option resolution.

use std::path::PathBuf;

use clap::Parser;
use projhub_config::Config;
use projhub_core::ViewKind;

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "projhub")]
#[command(about = "Browse a project board as a kanban board, a table or a roadmap", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file to display (JSON5 or JSON); the built-in sample otherwise.
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Configuration file; searched for in the default locations otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// View shown at startup: board, table or roadmap.
    #[arg(long, value_name = "VIEW")]
    pub view: Option<ViewKind>,

    /// Write logs to this file. Nothing is logged without one.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write the built-in sample snapshot as JSON to this file and exit.
    #[arg(long, value_name = "PATH")]
    pub export_sample: Option<PathBuf>,
}

/// Startup options after merging flags, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub snapshot: Option<PathBuf>,
    pub view: ViewKind,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Cli {
    /// Resolves each option: flag first, then config, then the default.
    #[must_use]
    pub fn resolve(&self, config: &Config) -> Options {
        Options {
            snapshot: self.snapshot.clone().or_else(|| config.snapshot.clone()),
            view: self.view.or(config.default_view).unwrap_or_default(),
            log_file: self.log_file.clone().or_else(|| config.log_file.clone()),
            log_filter: config
                .log_filter
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
