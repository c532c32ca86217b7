//! Issue to card mapping.

mod card_event;

pub use card_event::{CardEvent, Destination};

use crate::issues::Issue;

/// Builds the card description linking back to the issue.
fn describe(issue: &Issue) -> String {
    format!(
        "Repository: {}\nDirect link: {}",
        issue.repository_html_url, issue.html_url
    )
}

/// Maps one issue into a card event for `destination`.
///
/// The title is copied verbatim. Missing issue fields are already empty
/// strings, so this never fails.
#[must_use]
pub fn build_card_event(issue: &Issue, destination: &Destination) -> CardEvent {
    CardEvent {
        title: issue.title.clone(),
        description: describe(issue),
        destination: destination.clone(),
    }
}
