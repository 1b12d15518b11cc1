// SPDX-License-Identifier: Apache-2.0

//! The `list` command: run the pipeline and print cards to the terminal.

use std::process::ExitCode;

use anyhow::Result;
use console::style;

use gitfolio_core::{AppConfig, Lister, Outcome};

use crate::cli::{OutputContext, OutputFormat};
use crate::commands::{exit_code_for, types::ListResult};
use crate::output;
use crate::target::TerminalTarget;

/// Runs the pipeline against a terminal target and renders the result in
/// the requested output format.
pub async fn run(config: AppConfig, ctx: &OutputContext) -> Result<ExitCode> {
    let username = config.github.username.clone();
    let lister = Lister::new(config)?;
    let mut target = TerminalTarget::new(ctx.clone());

    let outcome = lister.run(&mut target).await;

    match outcome {
        Outcome::Rendered(_) => {
            let result = ListResult {
                username,
                cards: target.cards().to_vec(),
            };
            result.render_with_context(ctx)?;
        }
        Outcome::Empty => {
            // Keep stdout valid for JSON consumers; the message goes to stderr.
            if matches!(ctx.format, OutputFormat::Json) {
                println!("[]");
            }
            if let Some(status) = target.status() {
                eprintln!("{}", style(status.message()).yellow());
            }
        }
        Outcome::Misconfigured | Outcome::Failed => {
            if let Some(status) = target.status() {
                eprintln!("{}", style(status.message()).red());
            }
        }
    }

    Ok(exit_code_for(outcome))
}
