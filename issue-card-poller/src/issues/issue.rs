//! Issue records as returned by the issue tracker.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An issue read from the tracker. Only the fields needed for cards are kept.
///
/// String fields the tracker leaves out (or sends as `null`) are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Tracker-wide identifier.
    pub id: u64,

    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body.
    pub body: String,

    /// Web URL of the repository the issue belongs to.
    pub repository_html_url: String,

    /// Web URL of the issue itself.
    pub html_url: String,

    /// When the issue was opened.
    pub created_at: Option<DateTime<Utc>>,

    /// When the issue was last changed.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of an issue in GitHub's issue listing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawIssue {
    id: u64,
    #[serde(default)]
    number: u64,
    title: Option<String>,
    body: Option<String>,
    html_url: Option<String>,
    repository: Option<RawRepository>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    html_url: Option<String>,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Self {
            id: raw.id,
            number: raw.number,
            title: raw.title.unwrap_or_default(),
            body: raw.body.unwrap_or_default(),
            repository_html_url: raw
                .repository
                .and_then(|repo| repo.html_url)
                .unwrap_or_default(),
            html_url: raw.html_url.unwrap_or_default(),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}
