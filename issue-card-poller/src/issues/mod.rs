//! Issue fetching.
//!
//! The issue tracker is reached through [`IssueSource`]. Listing is a single
//! logical call: either every issue in the window comes back, or the whole
//! fetch fails.

mod error;
mod github;
mod issue;

pub use error::FetchError;
pub use github::GitHubIssueSource;
pub use issue::Issue;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Something that can list issues changed since a checkpoint.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Lists open issues created or updated at or after `checkpoint`, in the
    /// order the tracker returns them. An empty list is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the tracker cannot be reached, rejects the
    /// request, or answers with something unreadable.
    async fn list_issues_since(&self, checkpoint: DateTime<Utc>) -> Result<Vec<Issue>, FetchError>;
}
