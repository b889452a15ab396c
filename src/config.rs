#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use tracing::Level;

use crate::constants::{DEFAULT_SUBJECTS_FILE, LOG_ENV, SUBJECTS_ENV};

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the subject list is read from unless a path is given explicitly.
    subjects_path: PathBuf,
    /// Verbosity of the binary's log output.
    log_level:     Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subjects_path: PathBuf::from(DEFAULT_SUBJECTS_FILE),
            log_level:     Level::INFO,
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var(SUBJECTS_ENV).ok(), std::env::var(LOG_ENV).ok())
    }

    /// Builds a configuration from already looked-up variable values, falling
    /// back to defaults for missing or blank ones.
    pub fn from_vars(subjects: Option<String>, log: Option<String>) -> Self {
        let defaults = Self::default();

        let subjects_path = subjects
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.subjects_path);

        Self {
            subjects_path,
            log_level: parse_log_level(log),
        }
    }

    /// Default location of the subject list.
    pub fn subjects_path(&self) -> &Path {
        &self.subjects_path
    }

    /// Log level for the binary.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Parses a log level name, defaulting to `Level::INFO` when unset or
/// unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Global storage for the lazily constructed configuration.
static CONFIG_SLOT: OnceLock<Arc<Config>> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> Arc<Config> {
    Arc::clone(CONFIG_SLOT.get_or_init(|| Arc::new(Config::from_env())))
}
