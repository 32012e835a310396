//! Reading and writing configuration and snapshot files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON, and are
//! written back as pretty-printed JSON.
//!
//! # File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Local: `./projhub.json5` or `./projhub.json`
//! 2. User: `<config dir>/projhub/config.json5` or `<config dir>/projhub/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["projhub.json5", "projhub.json"];

/// User configuration directory name.
const USER_CONFIG_DIR: &str = "projhub";

/// User configuration file names, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file, looking in the working directory first
/// and in the user configuration directory second.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the user configuration directory, `<config dir>/projhub`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform configuration
/// directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_CONFIG_FILE_NAMES[0]))
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use projhub_config::Config;
/// use projhub_config::persistence::read_config_file;
///
/// # fn main() -> projhub_config::Result<()> {
/// let config: Config = read_config_file("projhub.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(|source| ConfigError::ParseJson5 {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot
/// be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists())
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}
