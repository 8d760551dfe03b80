//! Per-user directories for config and log files.
//!
//! Everything lives in one `.insightforge` folder under the OS config root.
//! `INSIGHTFORGE_CONFIG_HOME` relocates that root for tests and portable
//! installs.

use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Directory holding all application files, under the config root.
pub const APP_DIR_NAME: &str = ".insightforge";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No config root could be resolved on this system.
    #[error("No usable config directory available for application files")]
    NoBaseDir,
    /// A required directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
}

/// The `.insightforge` root, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    root_in(&base_dir()?)
}

/// The log directory under the root, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    logs_in(&base_dir()?)
}

fn base_dir() -> Result<PathBuf, AppDirError> {
    if let Ok(home) = std::env::var("INSIGHTFORGE_CONFIG_HOME") {
        return Ok(PathBuf::from(home));
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(AppDirError::NoBaseDir)
}

fn root_in(base: &Path) -> Result<PathBuf, AppDirError> {
    created(base.join(APP_DIR_NAME))
}

fn logs_in(base: &Path) -> Result<PathBuf, AppDirError> {
    created(base.join(APP_DIR_NAME).join("logs"))
}

fn created(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
