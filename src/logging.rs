//! Tracing setup: stdout plus one timestamped log file per launch.
//!
//! Timestamps are UTC throughout. Old launch files are pruned to a fixed
//! count; pruning is best-effort and never blocks startup. Any setup failure
//! is returned to the caller, which keeps running without a log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Number of launch files kept in the log directory.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "insightforge";

const FILE_NAME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory could not be resolved or created.
    #[error(transparent)]
    Dir(#[from] app_dirs::AppDirError),
    /// The launch log file could not be created.
    #[error("Failed to create log file {path}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
    /// The launch timestamp could not be formatted into a filename.
    #[error("Failed to format the log file timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    /// Another global subscriber was already installed.
    #[error("Failed to install the tracing subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber writing to stdout and this launch's file.
///
/// Idempotent; subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let dir = app_dirs::logs_dir()?;
    let file_name = log_file_name(OffsetDateTime::now_utc())?;
    let path = dir.join(&file_name);
    touch(&path)?;
    prune_old_logs(&dir, MAX_LOG_FILES);

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&dir, file_name));
    let timer = fmt::time::UtcTime::new(LINE_TIME_FORMAT);
    let subscriber = Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging to {}", path.display());
    Ok(())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    Ok(format!(
        "{LOG_FILE_PREFIX}_{}.log",
        now.format(FILE_NAME_FORMAT)?
    ))
}

fn touch(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Remove the oldest `.log` files beyond `keep`, skipping anything that
/// cannot be inspected or deleted.
fn prune_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut logs: Vec<(SystemTime, PathBuf)> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("log")
        })
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();
    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len().saturating_sub(keep);
    for (_, path) in logs.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_filename_has_prefix_and_utc_timestamp() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(
            log_file_name(fixed).unwrap(),
            "insightforge_2023-11-14_22-13-20.log"
        );
    }

    #[test]
    fn prune_keeps_newest_logs_and_ignores_other_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();
        for idx in 0..12 {
            touch(&dir.path().join(format!("insightforge_{idx}.log"))).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        prune_old_logs(dir.path(), 10);
        let mut logs: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".log"))
            .collect();
        logs.sort();
        assert_eq!(logs.len(), 10);
        assert!(!logs.contains(&"insightforge_0.log".to_string()));
        assert!(!logs.contains(&"insightforge_1.log".to_string()));
        assert!(dir.path().join("notes.txt").is_file());
    }

    #[test]
    fn prune_tolerates_a_missing_directory() {
        let dir = tempdir().unwrap();
        prune_old_logs(&dir.path().join("nope"), 10);
    }
}
