// SPDX-License-Identifier: Apache-2.0

//! Filter and selection over a fetched repository listing.
//!
//! This is the one piece of real logic in the pipeline, kept pure so it can
//! be tested without any network or rendering environment.

use crate::config::DEFAULT_DISPLAY_LIMIT;
use crate::github::repos::Repo;

/// Filter applied to the fetched listing before rendering.
#[derive(Debug, Clone)]
pub struct SelectionFilter {
    /// Retain repositories that are forks.
    pub include_forks: bool,
    /// Maximum number of repositories to keep.
    pub limit: usize,
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self {
            include_forks: false,
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

/// Retains repositories per the fork-inclusion flag, then takes a prefix of
/// at most `limit`, preserving the remote's ordering (already
/// most-recently-pushed-first).
#[must_use]
pub fn select_repos(repos: Vec<Repo>, filter: &SelectionFilter) -> Vec<Repo> {
    let mut selected: Vec<Repo> = repos
        .into_iter()
        .filter(|repo| filter.include_forks || !repo.fork)
        .collect();
    selected.truncate(filter.limit);
    selected
}
