// SPDX-License-Identifier: Apache-2.0

//! Terminal render target.
//!
//! Implements the pipeline's two display regions for an interactive shell:
//! the loading status becomes a spinner, terminal statuses and cards are
//! collected for the output layer to print once the run has finished.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use gitfolio_core::{RenderTarget, RepoCard, Status};

use crate::cli::OutputContext;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Render target backed by the terminal.
pub struct TerminalTarget {
    ctx: OutputContext,
    spinner: Option<ProgressBar>,
    status: Option<Status>,
    cards: Vec<RepoCard>,
}

impl TerminalTarget {
    /// Creates a terminal target for the given output context.
    pub fn new(ctx: OutputContext) -> Self {
        Self {
            ctx,
            spinner: None,
            status: None,
            cards: Vec::new(),
        }
    }

    /// The final status, if the run ended without cards.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// The rendered cards, empty unless the run succeeded.
    pub fn cards(&self) -> &[RepoCard] {
        &self.cards
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl RenderTarget for TerminalTarget {
    fn set_status(&mut self, status: &Status) {
        self.clear_spinner();
        self.cards.clear();
        match status {
            Status::Loading => {
                self.spinner = maybe_spinner(&self.ctx, &status.message());
                self.status = None;
            }
            other => {
                self.status = Some(other.clone());
            }
        }
    }

    fn set_cards(&mut self, cards: &[RepoCard]) {
        self.clear_spinner();
        self.status = None;
        self.cards = cards.to_vec();
    }
}
