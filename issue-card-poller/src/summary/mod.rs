//! Invocation result aggregation.

mod poll_result;

pub use poll_result::PollResult;
