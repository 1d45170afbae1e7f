//! `saltfile [PATH]` — create a new random salt file.
//!
//! The path comes from the positional argument, then `salt_path` in the
//! config file, then the `~/.ssh/salt` default.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::Cli;
use crate::config::Settings;
use crate::errors::Result;
use crate::logging::{LogRecord, Logger};
use crate::salt::{create_salt_file, resolve_salt_path, FilepathArg};
use tracing::Level;

/// Execute `saltfile [PATH]`. Returns the path that was written.
///
/// The path is resolved once here and handed to the core as explicit.
pub fn execute(cli: &Cli, settings: &Settings, logger: &dyn Logger) -> Result<PathBuf> {
    let filepath = settings.salt_path_or(cli.path.as_deref());

    let path = resolve_salt_path(&filepath).map_err(|e| {
        logger.log(&LogRecord::new(Level::ERROR, "execute", e.to_string()));
        e
    })?;
    create_salt_file(&FilepathArg::Path(path.clone()), logger)?;

    output::success(&format!("Salt file written to {}", path.display()));
    output::tip("Keep this file private. Anything derived from it depends on it.");

    Ok(path)
}
