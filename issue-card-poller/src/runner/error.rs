//! Runner error types.

use crate::config::ConfigError;
use crate::dispatch::DispatchError;
use crate::issues::FetchError;
use crate::secrets::SecretError;

/// Errors that end an invocation.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The access token could not be read.
    #[error("error reading GitHub personal access token: {0}")]
    Secret(#[from] SecretError),

    /// The GitHub client could not be built.
    #[error("error creating GitHub client: {0}")]
    GitHubClient(#[source] FetchError),

    /// Issues could not be listed.
    #[error("error getting new issues from GitHub: {0}")]
    Fetch(#[from] FetchError),

    /// The dispatcher could not be set up.
    #[error(transparent)]
    DispatcherSetup(DispatchError),

    /// A card event failed to dispatch.
    #[error("{source} (event {position} of {total}: \"{title}\")")]
    Dispatch {
        /// One-based position of the event in fetch order.
        position: usize,
        /// Number of issues fetched.
        total: usize,
        /// Title of the failed event.
        title: String,
        #[source]
        source: DispatchError,
    },
}
