// SPDX-License-Identifier: Apache-2.0

//! gitfolio - a portfolio view of a GitHub user's public repositories.
//!
//! Fetches the account's repositories with a single anonymous GitHub API
//! call, filters and truncates the listing, and renders repository cards on
//! the terminal or into a static HTML page.

mod cli;
mod commands;
mod errors;
mod html;
mod logging;
mod output;
mod target;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let mut config = match gitfolio_core::load_config() {
        Ok(config) => config,
        Err(e) => {
            let err = anyhow::Error::new(e).context("Failed to load configuration");
            eprintln!("Error: {}", errors::format_error(&err));
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("Configuration loaded successfully");

    // Apply CLI overrides to config
    if let Some(user) = &cli.user {
        config.github.username.clone_from(user);
        debug!("Overriding username to: {user}");
    }
    if let Some(limit) = cli.limit {
        config.display.limit = limit;
        debug!("Overriding display limit to: {limit}");
    }
    if cli.show_forks {
        config.display.show_forks = true;
    }

    match commands::run(cli.command, ctx, config).await {
        Ok(code) => Ok(code),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Ok(ExitCode::FAILURE)
        }
    }
}
