//! Command handlers.
//!
//! Handlers print user-facing output to stdout and return whether the
//! command reached its goal. `Err` is reserved for problems that stop a
//! command from running at all (unreadable files, bad config).

mod onboarding;
mod verification;

use std::process::ExitCode;

use cc_core::config::AppConfig;

use crate::cli::Command;

pub use onboarding::{load_record, submit, validate};
pub use verification::{snippets, token, verify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Validation errors, a failed submission or a failed verification.
    Failure,
}

impl From<CommandOutcome> for ExitCode {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Success => ExitCode::SUCCESS,
            CommandOutcome::Failure => ExitCode::FAILURE,
        }
    }
}

pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<CommandOutcome> {
    match command {
        Command::Token => Ok(token()),
        Command::Snippets { token, out_dir } => snippets(&token, out_dir.as_deref()).await,
        Command::Validate { record } => validate(&record),
        Command::Verify { website, token } => verify(config, &website, &token).await,
        Command::Submit {
            record,
            skip_verification,
        } => submit(config, &record, skip_verification).await,
    }
}
