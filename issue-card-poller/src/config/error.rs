//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The lookback interval is not a non-negative whole number of minutes.
    #[error("error getting timeinterval '{value}': {source}")]
    InvalidInterval {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Failed to read a config file.
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A config file value that cannot be read as a plain string.
    #[error("Unsupported value for '{key}' in '{path}': expected a string, integer or boolean")]
    UnsupportedValue { path: String, key: String },
}
