//! Orchestrates one polling invocation.

mod error;

pub use error::PollError;

use crate::checkpoint::{compute_checkpoint, Clock, SystemClock};
use crate::config::PollerConfig;
use crate::dispatch::{DispatchOutcome, DispatchPolicy, Dispatcher};
use crate::events::build_card_event;
use crate::issues::IssueSource;
use crate::summary::PollResult;
use tracing::{error, info, info_span, warn, Instrument};

/// Runs checkpoint, fetch, build and dispatch for one invocation.
///
/// Events are dispatched one at a time, in fetch order.
pub struct Poller {
    config: PollerConfig,
    issues: Box<dyn IssueSource>,
    dispatcher: Box<dyn Dispatcher>,
    clock: Box<dyn Clock>,
    policy: DispatchPolicy,
}

impl Poller {
    /// Builds a poller using the system clock and [`DispatchPolicy::AbortOnFirstFailure`].
    pub fn new(
        config: PollerConfig,
        issues: Box<dyn IssueSource>,
        dispatcher: Box<dyn Dispatcher>,
    ) -> Self {
        Self {
            config,
            issues,
            dispatcher,
            clock: Box::new(SystemClock),
            policy: DispatchPolicy::default(),
        }
    }

    /// Uses `clock` to place the polling window.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Sets what happens after a failed dispatch.
    #[must_use]
    pub fn with_dispatch_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Fetch`] if issues cannot be listed, and
    /// [`PollError::Dispatch`] for the first failed dispatch when the policy
    /// is [`DispatchPolicy::AbortOnFirstFailure`]. Later events are not sent.
    pub async fn poll(&self) -> Result<PollResult, PollError> {
        let checkpoint = compute_checkpoint(self.clock.now(), self.config.interval_minutes());
        info!(
            %checkpoint,
            interval_minutes = self.config.interval_minutes(),
            "Polling for new issues"
        );

        let issues = self.issues.list_issues_since(checkpoint).await?;
        let mut result = PollResult::new();

        if issues.is_empty() {
            info!("No new issues");
            return Ok(result);
        }

        let total = issues.len();
        info!(count = total, "Found issues");
        let destination = self.config.destination();

        for (index, issue) in issues.iter().enumerate() {
            let position = index + 1;
            let event = build_card_event(issue, &destination);
            let span = info_span!("dispatch", position, total, issue = issue.number);

            match self.dispatcher.dispatch(&event).instrument(span).await {
                Ok(()) => {
                    info!(position, title = %event.title, "Dispatched card event");
                    result.record(DispatchOutcome::succeeded(event));
                }
                Err(e) => match self.policy {
                    DispatchPolicy::AbortOnFirstFailure => {
                        error!(position, title = %event.title, error = %e, "Dispatch failed, aborting");
                        return Err(PollError::Dispatch {
                            position,
                            total,
                            title: event.title,
                            source: e,
                        });
                    }
                    DispatchPolicy::ContinueOnFailure => {
                        warn!(position, title = %event.title, error = %e, "Dispatch failed, continuing");
                        result.record(DispatchOutcome::failed(event, e.to_string()));
                    }
                },
            }
        }

        info!(
            processed = result.processed_count(),
            failed = result.failures().len(),
            "Poll complete"
        );
        Ok(result)
    }
}
