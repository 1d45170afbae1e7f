use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Result, SaltFileError};
use crate::salt::FilepathArg;

/// User-level configuration, loaded from `config.toml`.
///
/// Every field has a sensible default so saltfile works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where to write the salt when no path is given on the command line.
    #[serde(default)]
    pub salt_path: FilepathArg,

    /// Directory for `debug.log` (default: platform data dir).
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Default log level (default: "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_log_level() -> String {
    "debug".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            salt_path: FilepathArg::Absent,
            log_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the saltfile config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Default config location: `<config_dir>/saltfile/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(Self::FILE_NAME))
    }

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be read or parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            SaltFileError::Config(format!("Failed to read {}: {e}", config_path.display()))
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SaltFileError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Pick the salt path: an explicit CLI argument wins over the config.
    pub fn salt_path_or(&self, cli_path: Option<&Path>) -> FilepathArg {
        match cli_path {
            Some(path) => FilepathArg::from(path),
            None => self.salt_path.clone(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
