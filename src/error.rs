//! Error types for recolor

use thiserror::Error;

/// Result type alias for recolor operations
pub type Result<T> = std::result::Result<T, RecolorError>;

/// Recolor error types
#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to find the response file \"{0}\".")]
    ResponseFileNotFound(String),

    #[error("Color name syntax error: \"{0}\"")]
    ColorSyntax(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration value for \"{key}\": expected {expected}")]
    ConfigValue { key: String, expected: &'static str },

    #[error(transparent)]
    CommandLine(#[from] clap::Error),
}
