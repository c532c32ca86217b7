//! Per-event dispatch outcome.

use crate::events::CardEvent;

/// Result of dispatching one card event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The event that was dispatched.
    pub event: CardEvent,
    /// Whether the transport accepted the request.
    pub success: bool,
    /// What went wrong, for failed dispatches.
    pub error_detail: Option<String>,
}

impl DispatchOutcome {
    /// A dispatch that reached the card function.
    #[must_use]
    pub fn succeeded(event: CardEvent) -> Self {
        Self {
            event,
            success: true,
            error_detail: None,
        }
    }

    /// A dispatch that failed with `detail`.
    #[must_use]
    pub fn failed(event: CardEvent, detail: impl Into<String>) -> Self {
        Self {
            event,
            success: false,
            error_detail: Some(detail.into()),
        }
    }
}
