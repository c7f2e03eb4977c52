//! Shared error types, deadlines, and logging setup for the CLI.

use std::fmt::{self, Display, Formatter};
use std::future::Future;
use std::time::Duration;

use anyhow::anyhow;
use opi_client::{ClientError, NvmeControllerClient, VrfClient};
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;

/// Default logging filter when `RUST_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "warn";

pub(crate) type CliResult<T> = Result<T, CliError>;

/// Error type that distinguishes validation problems from runtime failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::InvalidAddress { .. } => Self::validation(error.to_string()),
            other => Self::failure(other),
        }
    }
}

/// Shared dependencies for command handlers.
#[derive(Debug, Clone)]
pub(crate) struct AppContext {
    pub(crate) addr: String,
}

impl AppContext {
    pub(crate) fn vrfs(&self) -> CliResult<VrfClient> {
        Ok(VrfClient::new(&self.addr)?)
    }

    pub(crate) fn controllers(&self) -> CliResult<NvmeControllerClient> {
        Ok(NvmeControllerClient::new(&self.addr)?)
    }
}

/// Bounds `operation` by the command deadline shared across all of its
/// requests.
pub(crate) async fn with_deadline<F>(deadline: Duration, operation: F) -> CliResult<()>
where
    F: Future<Output = CliResult<()>>,
{
    match timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(CliError::failure(anyhow!(
            "deadline of {}s exceeded",
            deadline.as_secs()
        ))),
    }
}

pub(crate) fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    // A second call keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
