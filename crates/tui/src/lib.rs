//! Terminal UI for projhub.
//!
//! This crate provides a Ratatui-based terminal interface over a
//! [`projhub_core::Session`]: it maps keyboard and mouse input to
//! [`projhub_core::Message`]s and renders the board, table and roadmap
//! views.
//!
//! # Overview
//!
//! - [`app`]: main application struct and run loop
//! - [`state`]: application state (session plus overlays)
//! - [`terminal`]: terminal setup, teardown and panic handling
//! - [`event`]: event polling and key mappings
//! - [`widgets`]: view renderers
//!
//! # Example
//!
//! ```no_run
//! use projhub_core::{Session, dummy};
//! use projhub_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Session::new(dummy::sample_snapshot()?));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::AppState;
