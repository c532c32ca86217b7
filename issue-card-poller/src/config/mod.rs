//! Poller configuration.
//!
//! Every setting is looked up by key through a [`ConfigSource`] and falls back
//! to a default. Values are resolved once, into a [`PollerConfig`], before any
//! network call is made.

mod error;
mod source;

pub use error::ConfigError;
pub use source::{ConfigSource, EnvConfigSource, FileConfigSource, LayeredConfigSource};

use crate::checkpoint::parse_interval;
use crate::events::Destination;
use tracing::debug;

/// Lookback window in minutes.
pub const INTERVAL_KEY: &str = "interval";
/// Trello board cards are created on.
pub const BOARD_KEY: &str = "trelloboard";
/// Trello list cards are created in.
pub const LIST_KEY: &str = "trellolist";
/// Base URL of the OpenFaaS gateway.
pub const GATEWAY_KEY: &str = "ofgateway";
/// Name of the card-creation function behind the gateway.
pub const FUNCTION_KEY: &str = "trellofunction";

pub const DEFAULT_INTERVAL: &str = "120";
pub const DEFAULT_BOARD: &str = "Main";
pub const DEFAULT_LIST: &str = "Tomorrow";
pub const DEFAULT_GATEWAY: &str = "http://gateway.openfaas:8080";
pub const DEFAULT_FUNCTION: &str = "trellocard";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Lookback window in minutes.
    interval_minutes: u64,
    /// Destination board for every card.
    board: String,
    /// Destination list for every card.
    list: String,
    /// Gateway base URL.
    gateway: String,
    /// Card function name.
    function: String,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 120,
            board: DEFAULT_BOARD.to_string(),
            list: DEFAULT_LIST.to_string(),
            gateway: DEFAULT_GATEWAY.to_string(),
            function: DEFAULT_FUNCTION.to_string(),
        }
    }
}

impl PollerConfig {
    /// Reads every recognized key from `source`, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInterval`] if `interval` is not a
    /// non-negative integer. There is no fallback window.
    pub fn resolve(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let interval = source.get_config_value(INTERVAL_KEY, DEFAULT_INTERVAL);
        let interval_minutes = parse_interval(&interval)?;

        let config = Self {
            interval_minutes,
            board: source.get_config_value(BOARD_KEY, DEFAULT_BOARD),
            list: source.get_config_value(LIST_KEY, DEFAULT_LIST),
            gateway: source.get_config_value(GATEWAY_KEY, DEFAULT_GATEWAY),
            function: source.get_config_value(FUNCTION_KEY, DEFAULT_FUNCTION),
        };

        debug!(
            interval_minutes = config.interval_minutes,
            board = %config.board,
            list = %config.list,
            endpoint = %config.endpoint(),
            "Resolved configuration"
        );
        Ok(config)
    }

    /// Returns the lookback window in minutes.
    pub fn interval_minutes(&self) -> u64 {
        self.interval_minutes
    }

    /// Returns the configured board.
    pub fn board(&self) -> &str {
        &self.board
    }

    /// Returns the configured list.
    pub fn list(&self) -> &str {
        &self.list
    }

    /// Destination shared by every card built in this invocation.
    pub fn destination(&self) -> Destination {
        Destination {
            board: self.board.clone(),
            list: self.list.clone(),
        }
    }

    /// URL the card events are posted to: `{gateway}/function/{function}`.
    pub fn endpoint(&self) -> String {
        format!("{}/function/{}", self.gateway, self.function)
    }
}
