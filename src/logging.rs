//! Tracing subscriber setup
//!
//! The interactive UI owns stdout, so events go to a file written by a
//! non-blocking worker. Without a log directory the interactive session
//! logs nothing and report mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::LOG_FILE_NAME;
use crate::error::{LogError, LogResult};

/// Where log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to `spice_tracker.log` in this directory
    File(&'a Path),
    Stderr,
    Discard,
}

/// Builds the filter for a level string such as `info` or `spice_tracker=debug`.
pub fn build_filter(level: &str) -> LogResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| LogError::InvalidLevel(level.to_string()))
}

/// Installs the global subscriber.
///
/// The returned guard must be held until exit so buffered file output is
/// flushed.
pub fn setup_logger(target: LogTarget<'_>, level: &str) -> LogResult<Option<WorkerGuard>> {
    let filter = build_filter(level)?;

    match target {
        LogTarget::File(dir) => {
            let path = dir.join(LOG_FILE_NAME);
            let open_err = |source| LogError::Open {
                path: path.clone(),
                source,
            };
            fs::create_dir_all(dir).map_err(open_err)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(open_err)?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_line_number(true)
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .try_init()
                .map_err(|_| LogError::AlreadyInitialized)?;
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(|_| LogError::AlreadyInitialized)?;
            Ok(None)
        }
        LogTarget::Discard => Ok(None),
    }
}
