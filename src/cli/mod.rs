//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Settings;
use crate::errors::Result;
use crate::logging::{self, Logger, NoopLogger, TracingLogger};

/// saltfile: create a random salt file for cryptographic modules.
#[derive(Parser)]
#[command(
    name = "saltfile",
    about = "Create a random 1024-byte salt file",
    version
)]
pub struct Cli {
    /// Path of the salt file to create (default: ~/.ssh/salt)
    pub path: Option<PathBuf>,

    /// Config file (default: <config_dir>/saltfile/config.toml)
    #[arg(long, env = "SALTFILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for debug.log (default: <data_dir>/saltfile/log)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (default: debug)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Load settings from `--config`, or the default location if it exists.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match cli.config.clone().or_else(Settings::default_path) {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    }
}

/// Set up file logging and return the logger to hand to the core.
///
/// Logging is best-effort: if the log directory or subscriber cannot be
/// set up, a warning is printed and a `NoopLogger` is returned instead.
/// Keep the returned guard alive until the end of `main`.
pub fn init_logger(cli: &Cli, settings: &Settings) -> (Box<dyn Logger>, Option<WorkerGuard>) {
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| settings.log_dir.clone())
        .or_else(logging::default_log_dir);
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);

    let Some(log_dir) = log_dir else {
        output::warning("cannot determine a log directory, logging disabled");
        return (Box::new(NoopLogger), None);
    };

    match logging::init_file_logging(&log_dir, level) {
        Ok(guard) => (Box::new(TracingLogger), Some(guard)),
        Err(e) => {
            output::warning(&format!("{e}, logging disabled"));
            (Box::new(NoopLogger), None)
        }
    }
}
