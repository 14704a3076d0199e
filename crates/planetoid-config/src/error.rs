//! Configuration and scene error types.

use std::path::PathBuf;

/// Errors that can occur when loading, saving, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

/// Errors produced while reading a scene description.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The scene file could not be opened or read.
    #[error("failed to read scene {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directive's value is not a number.
    #[error("line {line}: invalid value {value:?} for directive '{key}'")]
    InvalidNumber {
        line: usize,
        key: char,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A directive has no value after its key.
    #[error("line {line}: directive '{key}' is missing a value")]
    MissingValue { line: usize, key: char },
}
