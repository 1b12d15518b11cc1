// SPDX-License-Identifier: Apache-2.0

//! The `page` command: run the pipeline into a static HTML portfolio page.
//!
//! The page is written whatever the outcome: on failure or empty result it
//! carries the status message in its `status-message` region, exactly like
//! the terminal flow - only the exit code tells scripts something went wrong.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use gitfolio_core::{AppConfig, Lister};

use crate::cli::OutputContext;
use crate::commands::exit_code_for;
use crate::html::HtmlTarget;

/// Runs the pipeline against an HTML target and writes the page to a file
/// or stdout.
pub async fn run(
    config: AppConfig,
    ctx: &OutputContext,
    out: Option<PathBuf>,
    title: Option<String>,
) -> Result<ExitCode> {
    let title = title.unwrap_or_else(|| format!("{}'s repositories", config.github.username));
    let lister = Lister::new(config)?;
    let mut target = HtmlTarget::new();

    let outcome = lister.run(&mut target).await;
    let page = target.into_page(&title);

    match out {
        Some(path) => {
            std::fs::write(&path, &page)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            debug!("Wrote {} bytes to {}", page.len(), path.display());
            if ctx.is_interactive() {
                println!("{} {}", style("Wrote").green().bold(), path.display());
            }
        }
        None => print!("{page}"),
    }

    Ok(exit_code_for(outcome))
}
