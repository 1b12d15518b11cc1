// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for gitfolio.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// Markdown output for READMEs and profile pages
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, status lines)
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// gitfolio - a portfolio view of a GitHub user's public repositories.
///
/// Fetches the account's repositories with a single anonymous GitHub API
/// call, filters out forks, keeps the most recently pushed, and renders
/// them as cards - on the terminal or as a static HTML page.
#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, status lines)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Override the configured GitHub username
    #[arg(long, short = 'u', global = true)]
    pub user: Option<String>,

    /// Override the configured display limit
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Include repositories that are forks
    #[arg(long, global = true)]
    pub show_forks: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List repository cards on the terminal
    List,

    /// Generate a static portfolio page
    Page {
        /// Write the page to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Page title (defaults to "<username>'s repositories")
        #[arg(long)]
        title: Option<String>,
    },

    /// Generate shell completion scripts (output to stdout)
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
