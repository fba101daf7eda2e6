//! Tracing setup. The terminal UI owns stdout, so logs go to a file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const APP_DIR: &str = "wordru-keyboard";
const LOG_FILE: &str = "wordru-keyboard.log";

/// Default log file under the platform data directory.
pub fn default_log_path() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push(APP_DIR);
    path.push(LOG_FILE);
    Ok(path)
}

/// Installs the global subscriber writing to `path`.
///
/// The returned guard flushes the writer on drop and must live as long as
/// logging is needed.
pub fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(guard)
}

/// Like `init_logging`, but logging is optional: when the log file cannot be
/// set up the reason goes to stderr and the run continues without a
/// subscriber.
pub fn try_init_logging(path: Option<&Path>) -> Option<WorkerGuard> {
    let result = match path {
        Some(path) => init_logging(path),
        None => default_log_path().and_then(|path| init_logging(&path)),
    };

    match result {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            None
        }
    }
}
