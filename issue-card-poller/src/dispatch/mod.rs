//! Card event dispatch.
//!
//! Each event is one HTTP POST to the card function. A dispatch succeeds when
//! the request completes at the transport level; the response status and body
//! are not part of the outcome.

mod error;
mod outcome;

pub use error::DispatchError;
pub use outcome::DispatchOutcome;

use crate::events::CardEvent;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Request timeout for the card function. Dispatch has no other cancellation.
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// What to do after a card event fails to dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Stop at the first failure and fail the invocation.
    #[default]
    AbortOnFirstFailure,
    /// Record the failure and keep dispatching the remaining events.
    ContinueOnFailure,
}

/// Something that can deliver a card event.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Delivers `event`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the event cannot be encoded, the request
    /// cannot be built, or the transport fails.
    async fn dispatch(&self, event: &CardEvent) -> Result<(), DispatchError>;
}

/// Posts card events as JSON to the card function.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDispatcher {
    /// Creates a dispatcher for `endpoint` using [`DEFAULT_DISPATCH_TIMEOUT`].
    ///
    /// The endpoint is only parsed when a request is built, so a bad endpoint
    /// surfaces as a per-event [`DispatchError::RequestError`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ClientError`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_DISPATCH_TIMEOUT)
            .build()
            .map_err(DispatchError::ClientError)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the card function URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, event: &CardEvent) -> Result<(), DispatchError> {
        let payload = event.to_payload()?;
        let url = Url::parse(&self.endpoint).map_err(|e| DispatchError::RequestError {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        debug!(url = %url, bytes = payload.len(), "Posting card event");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(DispatchError::SendError)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Card function accepted event");
        } else {
            warn!(
                status = status.as_u16(),
                "Card function answered with a non-success status"
            );
        }
        Ok(())
    }
}
