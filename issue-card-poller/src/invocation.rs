//! Invocation boundary.
//!
//! Turns a poll into the text response the function harness returns. Every
//! failure, whatever its stage, is reported as a 500 with a readable message.

use crate::config::{ConfigSource, PollerConfig};
use crate::dispatch::{DispatchPolicy, HttpDispatcher};
use crate::issues::GitHubIssueSource;
use crate::runner::{PollError, Poller};
use crate::secrets::{read_access_token, SecretSource};
use crate::summary::PollResult;
use tracing::{error, info, info_span, Instrument};

/// Status of a completed invocation.
pub const STATUS_OK: u16 = 200;

/// Status of a failed invocation.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Options that are not part of the configuration surface.
#[derive(Debug, Clone, Default)]
pub struct InvocationOptions {
    /// GitHub API root; api.github.com when unset.
    pub github_api: Option<String>,
    /// Failure handling for dispatch.
    pub dispatch_policy: DispatchPolicy,
}

/// Response handed back to the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP-style status code.
    pub status_code: u16,
    /// Human readable summary or error.
    pub body: String,
}

impl Response {
    /// Maps a poll result onto a response.
    pub fn from_result(result: &Result<PollResult, PollError>) -> Self {
        match result {
            Ok(summary) if summary.is_success() => Self {
                status_code: STATUS_OK,
                body: format!(
                    "found a total of {} new issues",
                    summary.processed_count()
                ),
            },
            Ok(summary) => {
                let details: Vec<String> = summary
                    .failures()
                    .iter()
                    .map(|outcome| {
                        format!(
                            "\"{}\": {}",
                            outcome.event.title,
                            outcome.error_detail.as_deref().unwrap_or("unknown error")
                        )
                    })
                    .collect();
                Self {
                    status_code: STATUS_INTERNAL_SERVER_ERROR,
                    body: format!(
                        "found a total of {} new issues, {} failed to dispatch: {}",
                        summary.processed_count(),
                        summary.failures().len(),
                        details.join("; ")
                    ),
                }
            }
            Err(e) => Self {
                status_code: STATUS_INTERNAL_SERVER_ERROR,
                body: e.to_string(),
            },
        }
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Runs one invocation with production collaborators and reports the result.
///
/// Configuration is resolved and the access token read before any network
/// call is made.
///
/// # Errors
///
/// Returns the first [`PollError`] encountered.
pub async fn invoke(
    config_source: &dyn ConfigSource,
    secrets: &dyn SecretSource,
    options: &InvocationOptions,
) -> Result<PollResult, PollError> {
    let config = PollerConfig::resolve(config_source)?;
    let token = read_access_token(secrets)?;

    let issues = match &options.github_api {
        Some(uri) => GitHubIssueSource::with_base_uri(&token, uri),
        None => GitHubIssueSource::new(&token),
    }
    .map_err(PollError::GitHubClient)?;
    let dispatcher = HttpDispatcher::new(config.endpoint()).map_err(PollError::DispatcherSetup)?;

    Poller::new(config, Box::new(issues), Box::new(dispatcher))
        .with_dispatch_policy(options.dispatch_policy)
        .poll()
        .await
}

/// Handles one invocation end to end and never fails; errors become a 500.
pub async fn handle(
    config_source: &dyn ConfigSource,
    secrets: &dyn SecretSource,
    options: &InvocationOptions,
) -> Response {
    let span = info_span!("invocation");

    async {
        let result = invoke(config_source, secrets, options).await;
        match &result {
            Ok(summary) => info!(
                processed = summary.processed_count(),
                failed = summary.failures().len(),
                "Invocation finished"
            ),
            Err(e) => error!(error = %e, "Invocation failed"),
        }
        Response::from_result(&result)
    }
    .instrument(span)
    .await
}
