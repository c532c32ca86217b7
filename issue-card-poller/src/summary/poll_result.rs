//! Poll result types.

use crate::dispatch::DispatchOutcome;

/// Aggregated outcome of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollResult {
    /// Number of issues handed to the dispatcher.
    processed_count: usize,

    /// Failed dispatches, in fetch order.
    failures: Vec<DispatchOutcome>,
}

impl PollResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dispatch attempt.
    pub fn record(&mut self, outcome: DispatchOutcome) {
        self.processed_count += 1;
        if !outcome.success {
            self.failures.push(outcome);
        }
    }

    /// Returns the number of issues attempted.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    /// Returns the failed dispatches.
    #[must_use]
    pub fn failures(&self) -> &[DispatchOutcome] {
        &self.failures
    }

    /// Returns true if every attempted dispatch succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CardEvent, Destination};

    fn event(title: &str) -> CardEvent {
        CardEvent {
            title: title.to_string(),
            description: String::new(),
            destination: Destination {
                board: "Main".to_string(),
                list: "Tomorrow".to_string(),
            },
        }
    }

    #[test]
    fn empty_result_is_success() {
        let result = PollResult::new();

        assert_eq!(result.processed_count(), 0);
        assert!(result.is_success());
    }

    #[test]
    fn can_record_outcomes() {
        let mut result = PollResult::new();

        result.record(DispatchOutcome::succeeded(event("one")));
        result.record(DispatchOutcome::failed(event("two"), "timed out"));
        result.record(DispatchOutcome::succeeded(event("three")));
        result.record(DispatchOutcome::failed(event("four"), "refused"));

        assert_eq!(result.processed_count(), 4);
        assert!(!result.is_success());
        let titles: Vec<_> = result.failures().iter().map(|o| o.event.title.as_str()).collect();
        assert_eq!(titles, ["two", "four"]);
    }
}
