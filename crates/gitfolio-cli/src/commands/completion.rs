// SPDX-License-Identifier: Apache-2.0

//! Shell completion script generation.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Writes the completion script for a shell to stdout.
pub fn run_generate(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gitfolio", &mut std::io::stdout());
}
