//! Issue fetching error types.

use std::error::Error as _;
use thiserror::Error;

/// Errors that can occur while listing issues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The GitHub client could not be built.
    #[error("{}", describe(.0))]
    ClientError(#[source] octocrab::Error),

    /// GitHub API error.
    #[error("GitHub API error: {}", describe(.0))]
    GitHubError(#[from] octocrab::Error),
}

/// Renders an octocrab error with its cause.
///
/// octocrab's own display is only the variant name, so API errors are
/// rendered as status and message, and anything else as its source chain.
fn describe(error: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = error {
        return format!("{}: {}", source.status_code, source.message);
    }

    let mut text = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        cause = inner.source();
    }
    text
}
