//! projhub - a terminal viewer for project boards.
//!
//! This is the main binary: it resolves startup options, installs logging,
//! loads the snapshot and runs the TUI.

mod cli;

use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use projhub_config::{Config, export_snapshot, load_snapshot};
use projhub_core::{ProjectSnapshot, Session, dummy};
use projhub_tui::{App, terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Options};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicit config must load; a discovered one may be skipped.
    let (config, config_problem) = match &cli.config {
        Some(path) => (
            Config::load_from(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None,
        ),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };
    let options = cli.resolve(&config);

    init_logging(&options)?;
    if let Some(err) = config_problem {
        warn!(error = %err, "ignoring config file, using defaults");
    }

    if let Some(path) = &cli.export_sample {
        let sample = sample_snapshot(&config)?;
        export_snapshot(path, &sample)
            .with_context(|| format!("failed to export sample to {}", path.display()))?;
        info!(path = %path.display(), "exported sample snapshot");
        return Ok(());
    }

    let snapshot = match &options.snapshot {
        Some(path) => load_snapshot(path, config.progress_defaults)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?,
        None => sample_snapshot(&config)?,
    };
    info!(
        project = snapshot.name(),
        items = snapshot.len(),
        view = %options.view,
        "starting"
    );

    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(Session::with_view(snapshot, options.view));
    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if the app failed.
    terminal::restore_terminal(&mut terminal)?;

    result
}

fn sample_snapshot(config: &Config) -> anyhow::Result<ProjectSnapshot> {
    Ok(dummy::sample_snapshot()
        .context("built-in sample is invalid")?
        .with_progress_defaults(config.progress_defaults))
}

/// Installs a file logger when a log file is configured.
///
/// The terminal belongs to the TUI, so without a log file nothing is logged.
fn init_logging(options: &Options) -> anyhow::Result<()> {
    let Some(path) = &options.log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.log_filter))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
