//! Dispatch error types.

use thiserror::Error;

/// Errors that can occur while handing a card event to the card function.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The HTTP client could not be built.
    #[error("error creating HTTP client for Trello function: {0}")]
    ClientError(#[source] reqwest::Error),

    /// The event could not be encoded.
    #[error("error marshalling GitHub issue for Trello: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The request could not be constructed.
    #[error("error sending message to Trello function: invalid endpoint '{endpoint}': {source}")]
    RequestError {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The request failed at the transport level.
    #[error("received error from Trello function: {0}")]
    SendError(#[source] reqwest::Error),
}
