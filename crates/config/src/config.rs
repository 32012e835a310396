//! The configuration struct and its loading logic.

use std::path::{Path, PathBuf};

use projhub_core::{ProgressDefaults, ViewKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Application configuration.
///
/// Every field is optional; command-line flags take precedence over any
/// value set here.
///
/// # Examples
///
/// ```
/// use projhub_config::Config;
/// use projhub_core::ViewKind;
///
/// let config: Config = serde_json5::from_str(r#"{
///     default_view: "roadmap",
///     progress_defaults: { backlog: 10 },
/// }"#).unwrap();
///
/// assert_eq!(config.default_view, Some(ViewKind::Roadmap));
/// assert_eq!(config.progress_defaults.backlog, 10);
/// assert_eq!(config.progress_defaults.done, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file to open instead of the built-in sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,

    /// View shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ViewKind>,

    /// Roadmap progress for items without an explicit percentage.
    #[serde(default)]
    pub progress_defaults: ProgressDefaults,

    /// File that receives log output. Logging is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `"debug"` or `"projhub_core=trace"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// Loads the configuration from the first file found in the default
    /// locations, or returns the defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = read_config_file(path)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Saves the configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProgress`] if a progress default is
    /// above 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use projhub_config::Config;
    /// use projhub_core::ProgressDefaults;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.progress_defaults = ProgressDefaults { done: 140, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        match self.progress_defaults.out_of_range() {
            Some((status, value)) => Err(ConfigError::InvalidProgress { status, value }),
            None => Ok(()),
        }
    }
}
