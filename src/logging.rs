//! Structured logging for salt file operations.
//!
//! The core never reaches for a global logger. Each operation receives a
//! `&dyn Logger` and reports to it:
//! - a debug record on entry with the received parameters
//! - an error record when the operation fails
//! - a debug record on exit with the status code (never the salt itself)
//!
//! `NoopLogger` is the default. `TracingLogger` forwards records to the
//! `tracing` subscriber installed by [`init_file_logging`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::errors::{Result, SaltFileError};

/// Name of the log file created inside the log directory.
pub const LOG_FILE_NAME: &str = "debug.log";

/// Module name stamped on every record emitted by this crate.
const MODULE_NAME: &str = "SaltFile";

/// A single structured log entry.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub process: &'a str,
    pub module: &'a str,
    pub file: &'a str,
    pub function: &'a str,
    pub message: String,
}

impl<'a> LogRecord<'a> {
    /// Build a record for `function`, stamped with the current time and
    /// the caller's source file.
    #[track_caller]
    pub fn new(level: Level, function: &'a str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            process: env!("CARGO_PKG_NAME"),
            module: MODULE_NAME,
            file: std::panic::Location::caller().file(),
            function,
            message: message.into(),
        }
    }
}

/// Sink for structured log records.
///
/// `log` returns nothing. A logger that cannot deliver a record swallows
/// the failure; it must never replace an operation's own result.
pub trait Logger {
    fn log(&self, record: &LogRecord<'_>);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _record: &LogRecord<'_>) {}
}

/// Forwards records to the current `tracing` subscriber, with the record's
/// own timestamp and origin as event fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, record: &LogRecord<'_>) {
        let LogRecord {
            process,
            module,
            file,
            function,
            message,
            ..
        } = record;
        let timestamp = record.timestamp.to_rfc3339();

        match record.level {
            Level::ERROR => {
                tracing::error!(%timestamp, process, module, file, function, "{message}")
            }
            Level::WARN => {
                tracing::warn!(%timestamp, process, module, file, function, "{message}")
            }
            Level::INFO => {
                tracing::info!(%timestamp, process, module, file, function, "{message}")
            }
            Level::DEBUG => {
                tracing::debug!(%timestamp, process, module, file, function, "{message}")
            }
            _ => tracing::trace!(%timestamp, process, module, file, function, "{message}"),
        }
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, record: &LogRecord<'_>) {
        (**self).log(record)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, record: &LogRecord<'_>) {
        (**self).log(record)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, record: &LogRecord<'_>) {
        (**self).log(record)
    }
}

/// Default log directory: `<data_local_dir>/saltfile/log`.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("log"))
}

/// Install a global `tracing` subscriber writing to `<log_dir>/debug.log`.
///
/// Creates `log_dir` if needed. `level` sets the default filter and
/// `RUST_LOG` still overrides it. The returned guard flushes the
/// background writer on drop, so keep it alive for the whole run.
pub fn init_file_logging(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    let level: LevelFilter = level
        .parse()
        .map_err(|e| SaltFileError::Config(format!("invalid log level '{level}': {e}")))?;

    std::fs::create_dir_all(log_dir).map_err(|e| {
        SaltFileError::Config(format!(
            "cannot create log directory {}: {e}",
            log_dir.display()
        ))
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|e| {
            SaltFileError::Config(format!(
                "cannot open {}: {e}",
                log_dir.join(LOG_FILE_NAME).display()
            ))
        })?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| SaltFileError::Config(format!("cannot install logger: {e}")))?;

    Ok(guard)
}
