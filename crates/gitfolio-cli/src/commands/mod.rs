// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the gitfolio CLI.

pub mod completion;
pub mod list;
pub mod page;
pub mod types;

use std::process::ExitCode;

use anyhow::Result;

use gitfolio_core::{AppConfig, Outcome};

use crate::cli::{Commands, OutputContext};

/// Maps a pipeline outcome to the raw process exit code.
///
/// The empty result is informational, not an error, so it exits zero.
/// The misconfiguration guard gets its own code so scripts can tell it apart
/// from a fetch failure.
const fn raw_exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Rendered(_) | Outcome::Empty => 0,
        Outcome::Failed => 1,
        Outcome::Misconfigured => 2,
    }
}

/// Maps a pipeline outcome to the process exit code.
pub fn exit_code_for(outcome: Outcome) -> ExitCode {
    ExitCode::from(raw_exit_code(outcome))
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: AppConfig) -> Result<ExitCode> {
    match command {
        Commands::List => list::run(config, &ctx).await,
        Commands::Page { out, title } => page::run(config, &ctx, out, title).await,
        Commands::Completion { shell } => {
            completion::run_generate(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_not_an_error_exit() {
        assert_eq!(raw_exit_code(Outcome::Rendered(3)), 0);
        assert_eq!(raw_exit_code(Outcome::Empty), 0);
    }

    #[test]
    fn misconfiguration_has_its_own_exit_code() {
        assert_eq!(raw_exit_code(Outcome::Misconfigured), 2);
        assert_eq!(raw_exit_code(Outcome::Failed), 1);
    }
}
