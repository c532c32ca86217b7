//! CLI for the Issue Card Poller.
//!
//! Runs one invocation: lists GitHub issues changed within the configured
//! interval and posts each one to the Trello card function. Schedule it with
//! cron, a CI timer or an OpenFaaS cron connector.

use clap::Parser;
use issue_card_poller::{
    invoke, DispatchPolicy, EnvConfigSource, FileConfigSource, InvocationOptions,
    LayeredConfigSource, MountedSecrets, PollError, PollResult, Response,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Card Poller - Turn recently updated GitHub issues into Trello cards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with configuration values. Environment variables take precedence.
    #[arg(long, env = "POLLER_CONFIG")]
    config: Option<PathBuf>,

    /// Directory to read secrets from. Repeat to add fallbacks.
    /// Defaults to /var/openfaas/secrets, then /run/secrets.
    #[arg(long = "secrets-dir")]
    secrets_dirs: Vec<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    github_api: Option<String>,

    /// Keep dispatching after a card fails to send instead of aborting.
    #[arg(long)]
    continue_on_failure: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    let result = run(args).await;

    let response = Response::from_result(&result);
    println!("{}", response.body);

    match result {
        Ok(summary) if summary.is_success() => ExitCode::from(0),
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the collaborators and runs one invocation.
async fn run(args: Args) -> Result<PollResult, PollError> {
    let mut config_source = LayeredConfigSource::new().with(EnvConfigSource);
    if let Some(path) = &args.config {
        config_source = config_source.with(FileConfigSource::load(path)?);
    }

    let secrets = if args.secrets_dirs.is_empty() {
        MountedSecrets::default()
    } else {
        MountedSecrets::new(args.secrets_dirs)
    };

    let options = InvocationOptions {
        github_api: args.github_api,
        dispatch_policy: if args.continue_on_failure {
            DispatchPolicy::ContinueOnFailure
        } else {
            DispatchPolicy::AbortOnFirstFailure
        },
    };

    info!(dispatch_policy = ?options.dispatch_policy, "Starting invocation");
    invoke(&config_source, &secrets, &options).await
}
