//! GitHub-backed issue source.

use super::issue::RawIssue;
use super::{FetchError, Issue, IssueSource};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

/// Issues listing for the authenticated user.
const ISSUES_ROUTE: &str = "/user/issues";

/// Results per page for the issue listing.
const RESULTS_PER_PAGE: u8 = 100;

/// Query parameters of the issue listing.
#[derive(Debug, Serialize)]
struct ListIssuesParams {
    filter: &'static str,
    state: &'static str,
    since: String,
    per_page: u8,
}

impl ListIssuesParams {
    /// Open issues assigned to the token's user, changed at or after `since`.
    fn since(checkpoint: DateTime<Utc>) -> Self {
        Self {
            filter: "assigned",
            state: "open",
            since: checkpoint.to_rfc3339_opts(SecondsFormat::Secs, true),
            per_page: RESULTS_PER_PAGE,
        }
    }
}

/// Lists issues through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubIssueSource {
    octocrab: Octocrab,
}

impl GitHubIssueSource {
    /// Builds a client for api.github.com authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientError`] if the client cannot be built.
    pub fn new(token: &str) -> Result<Self, FetchError> {
        Self::build(token, None)
    }

    /// Builds a client against a custom API root (GitHub Enterprise, test servers).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientError`] if `base_uri` is invalid or the
    /// client cannot be built.
    pub fn with_base_uri(token: &str, base_uri: &str) -> Result<Self, FetchError> {
        Self::build(token, Some(base_uri))
    }

    fn build(token: &str, base_uri: Option<&str>) -> Result<Self, FetchError> {
        install_crypto_provider();

        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(uri) = base_uri {
            builder = builder.base_uri(uri).map_err(FetchError::ClientError)?;
        }
        let octocrab = builder.build().map_err(FetchError::ClientError)?;
        Ok(Self { octocrab })
    }
}

/// Installs aws-lc-rs as the process-wide rustls provider.
fn install_crypto_provider() {
    // Fails once a provider is installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

#[async_trait]
impl IssueSource for GitHubIssueSource {
    async fn list_issues_since(&self, checkpoint: DateTime<Utc>) -> Result<Vec<Issue>, FetchError> {
        let params = ListIssuesParams::since(checkpoint);
        let span = info_span!("list_issues", since = %params.since);

        async {
            debug!(route = ISSUES_ROUTE, "Requesting issues");
            let mut page: Page<RawIssue> = self.octocrab.get(ISSUES_ROUTE, Some(&params)).await?;
            let mut issues = Vec::new();

            loop {
                issues.extend(page.items.drain(..).map(Issue::from));

                let next_page = self.octocrab.get_page::<RawIssue>(&page.next).await?;
                match next_page {
                    Some(next_page) => page = next_page,
                    None => break,
                }
            }

            info!(count = issues.len(), "Listed issues");
            Ok(issues)
        }
        .instrument(span)
        .await
    }
}
