//! Sources of raw configuration values.

use super::ConfigError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// A key/value lookup for poller settings.
///
/// Implementations only report whether a key is set; defaults are applied by
/// [`ConfigSource::get_config_value`].
pub trait ConfigSource: Send + Sync {
    /// Returns the raw value for `key`, if this source defines it.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Returns the value for `key`, or `default` when the key is not set.
    fn get_config_value(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads configuration from process environment variables.
///
/// Keys are used as-is, so `interval` is read from the `interval` variable.
/// A variable that is set to an empty string still counts as set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Reads configuration from a flat TOML table.
///
/// ```toml
/// interval = 60
/// trelloboard = "Main"
/// trellolist = "Tomorrow"
/// ```
///
/// Strings are taken verbatim; integers and booleans are converted to their
/// textual form. Tables, arrays, floats and datetimes are rejected.
#[derive(Debug, Clone, Default)]
pub struct FileConfigSource {
    values: BTreeMap<String, String>,
}

impl FileConfigSource {
    /// Loads a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not a flat
    /// table of supported values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading config file");
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses config file content. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not a flat table of
    /// supported values.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let table: BTreeMap<String, toml::Value> =
            toml::from_str(content).map_err(|e| ConfigError::TomlError {
                path: origin.to_string(),
                source: e,
            })?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => {
                    return Err(ConfigError::UnsupportedValue {
                        path: origin.to_string(),
                        key,
                    })
                }
            };
            values.insert(key, value);
        }

        debug!(count = values.len(), "Parsed config values");
        Ok(Self { values })
    }
}

impl ConfigSource for FileConfigSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Chains several sources; the first one that defines a key wins.
#[derive(Default)]
pub struct LayeredConfigSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfigSource {
    /// Creates an empty chain. Every lookup falls through to the default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lower-priority source.
    #[must_use]
    pub fn with(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl ConfigSource for LayeredConfigSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.lookup(key))
    }
}
