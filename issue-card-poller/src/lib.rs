#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod checkpoint;
pub mod config;
pub mod dispatch;
pub mod events;
pub mod invocation;
pub mod issues;
pub mod runner;
pub mod secrets;
pub mod summary;

pub use checkpoint::{compute_checkpoint, parse_interval, Clock, FixedClock, SystemClock};
pub use config::{
    ConfigError, ConfigSource, EnvConfigSource, FileConfigSource, LayeredConfigSource,
    PollerConfig,
};
pub use dispatch::{
    DispatchError, DispatchOutcome, DispatchPolicy, Dispatcher, HttpDispatcher,
    DEFAULT_DISPATCH_TIMEOUT,
};
pub use events::{build_card_event, CardEvent, Destination};
pub use invocation::{handle, invoke, InvocationOptions, Response};
pub use issues::{FetchError, GitHubIssueSource, Issue, IssueSource};
pub use runner::{PollError, Poller};
pub use secrets::{
    read_access_token, MountedSecrets, SecretError, SecretSource, ACCESS_TOKEN_SECRET,
};
pub use summary::PollResult;
