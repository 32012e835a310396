//! Configuration management for projhub.
//!
//! This crate discovers, validates and persists the configuration file and
//! reads and writes snapshot files.
//!
//! - [`config`]: the [`Config`] struct and its loading logic
//! - [`snapshot`]: loading and exporting snapshot files
//! - [`persistence`]: file discovery, reading and writing
//! - [`error`]: error types
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command-line flags (handled by the binary)
//! 2. Local config (`./projhub.json5` or `./projhub.json`)
//! 3. User config (`<config dir>/projhub/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use projhub_config::{Config, load_snapshot};
//!
//! # fn example() -> projhub_config::Result<()> {
//! let config = Config::load()?;
//! if let Some(path) = &config.snapshot {
//!     let snapshot = load_snapshot(path, config.progress_defaults)?;
//!     println!("{} items", snapshot.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod snapshot;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use snapshot::{export_snapshot, load_snapshot};
