// SPDX-License-Identifier: Apache-2.0

//! The fetch-filter-render pipeline.
//!
//! [`Lister`] runs the whole flow once per invocation: configuration guard,
//! loading state, one fetch, filter/select, then card rendering through a
//! [`RenderTarget`]. The target abstracts the two display regions of the
//! portfolio page (status text and card grid) so the pipeline is testable
//! without any real page environment.
//!
//! The three user-visible states (loading, error, cards) are mutually
//! exclusive: every `set_status` replaces the previous status, and
//! `set_cards` clears it.

use reqwest::Client;
use tracing::{error, info, instrument, warn};

use crate::card::RepoCard;
use crate::config::AppConfig;
use crate::github::repos::{Repo, fetch_user_repos};
use crate::select::{SelectionFilter, select_repos};

/// Status shown in the display area while no cards are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Fetch in flight.
    Loading,
    /// The configured username is still the placeholder. Reported before any
    /// network activity.
    Misconfigured,
    /// Transport or API failure, with the underlying cause.
    Failed {
        /// Human-readable cause.
        message: String,
    },
    /// Zero records survived filtering. Distinct from a fetch failure.
    Empty {
        /// The configured account the message names.
        username: String,
    },
}

impl Status {
    /// User-facing message for this status.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Status::Loading => "Loading repositories...".to_string(),
            Status::Misconfigured => {
                "Set `github.username` in the config file (or pass --user) to your \
                 GitHub username to see your repositories."
                    .to_string()
            }
            Status::Failed { message } => {
                format!("Failed to load repositories. Error: {message}")
            }
            Status::Empty { username } => {
                format!(
                    "Could not find any public repositories for user \"{username}\" \
                     (or they were all forks)."
                )
            }
        }
    }

    /// True for the error-styled statuses (everything except loading).
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Status::Loading)
    }
}

/// The two display regions the pipeline writes to.
///
/// Mirrors the original page contract: one region for status/error text, one
/// for the card grid. Implementations own styling and layout; the pipeline
/// only ever writes.
pub trait RenderTarget {
    /// Replaces the status region's contents. Implementations should clear
    /// any rendered cards.
    fn set_status(&mut self, status: &Status);

    /// Replaces the card region's contents and clears any prior status.
    fn set_cards(&mut self, cards: &[RepoCard]);
}

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cards were rendered; carries the card count.
    Rendered(usize),
    /// Zero records survived filtering.
    Empty,
    /// Placeholder username; no network call was made.
    Misconfigured,
    /// Fetch or parse failure.
    Failed,
}

/// Runs the fetch-filter-render pipeline against a render target.
pub struct Lister {
    config: AppConfig,
    http: Client,
}

impl Lister {
    /// Creates a lister from configuration.
    ///
    /// No request timeout is set; the transport default applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: AppConfig) -> crate::Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    /// Runs the pipeline once.
    ///
    /// Every run ends in exactly one of the four [`Outcome`]s; errors are
    /// surfaced through the target's status region and logged, never
    /// propagated. There is no retry: the only recovery is another run.
    #[instrument(skip(self, target), fields(username = %self.config.github.username))]
    pub async fn run(&self, target: &mut dyn RenderTarget) -> Outcome {
        if self.config.github.is_placeholder() {
            warn!("Username is still the placeholder, skipping fetch");
            target.set_status(&Status::Misconfigured);
            return Outcome::Misconfigured;
        }

        target.set_status(&Status::Loading);

        let repos = match fetch_user_repos(
            &self.http,
            &self.config.github.api_base,
            &self.config.github.username,
        )
        .await
        {
            Ok(repos) => repos,
            Err(err) => {
                error!("Failed to fetch repositories: {err}");
                target.set_status(&Status::Failed {
                    message: err.to_string(),
                });
                return Outcome::Failed;
            }
        };

        self.present(repos, target)
    }

    /// Filters the fetched listing and writes the result to the target.
    fn present(&self, repos: Vec<Repo>, target: &mut dyn RenderTarget) -> Outcome {
        let filter = SelectionFilter {
            include_forks: self.config.display.show_forks,
            limit: self.config.display.limit,
        };
        let selected = select_repos(repos, &filter);

        if selected.is_empty() {
            warn!(
                "No qualifying repositories for {}",
                self.config.github.username
            );
            target.set_status(&Status::Empty {
                username: self.config.github.username.clone(),
            });
            return Outcome::Empty;
        }

        let cards: Vec<RepoCard> = selected.iter().map(RepoCard::from_repo).collect();
        info!("Rendering {} repository cards", cards.len());
        target.set_cards(&cards);
        Outcome::Rendered(cards.len())
    }
}
