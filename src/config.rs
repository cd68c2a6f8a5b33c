//! Configuration file support
//!
//! Loads settings from ~/.recolor/config.toml (or
//! %USERPROFILE%\.recolor\config.toml on Windows)
//!
//! Example:
//! ```text
//! # recolor configuration
//! verbose = false
//! rules = [
//!     "darkgray*=^#.*",
//!     "red*=\\b(error|fail(ed|ure)?)\\b",
//! ]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use toml::Table;
use tracing::debug;

use crate::error::{RecolorError, Result};

/// Name of the per-user directory holding the config and response files
pub const DOT_DIR: &str = ".recolor";

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether to log the expanded arguments and rules
    pub verbose: bool,
    /// Rules declared before any given on the command line
    pub rules: Vec<String>,
}

/// Get the user's home directory
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(DOT_DIR).join("config.toml"))
    }

    /// Load configuration from the user's config file, if there is one
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let Some(path) = Self::config_path() else {
            return Ok(config);
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading configuration");
                config.apply(&Self::parse(&contents)?)?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(config)
    }

    /// Parse config file contents into a table
    fn parse(contents: &str) -> Result<Table> {
        Ok(contents.parse::<Table>()?)
    }

    /// Apply settings from a parsed config
    fn apply(&mut self, settings: &Table) -> Result<()> {
        if let Some(value) = settings.get("verbose") {
            self.verbose = value.as_bool().ok_or_else(|| invalid("verbose", "a boolean"))?;
        }

        if let Some(value) = settings.get("rules") {
            let rules = value.as_array().ok_or_else(|| invalid("rules", "an array of strings"))?;
            self.rules = rules
                .iter()
                .map(|rule| rule.as_str().map(str::to_string))
                .collect::<Option<_>>()
                .ok_or_else(|| invalid("rules", "an array of strings"))?;
        }

        for key in settings.keys() {
            if !matches!(key.as_str(), "verbose" | "rules") {
                debug!(key = key.as_str(), "ignoring unknown configuration key");
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, expected: &'static str) -> RecolorError {
    RecolorError::ConfigValue {
        key: key.to_string(),
        expected,
    }
}
