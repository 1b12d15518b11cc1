// SPDX-License-Identifier: Apache-2.0

//! Repository listing via the GitHub REST API.
//!
//! Issues a single anonymous GET against `/users/{username}/repos`, sorted by
//! last push, one page only. Accounts with more than one page of repositories
//! are served the first page; no further pagination is attempted.

use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::FolioError;
use crate::github::USER_AGENT_VALUE;

/// Page size requested from the listing endpoint. Large enough to cover any
/// sensible display limit in one round trip.
pub const PER_PAGE: u8 = 100;

/// One repository's metadata as returned by the remote listing call.
///
/// Only the fields the portfolio consumes are modeled; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    /// Remote identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL of the repository's page on github.com.
    pub html_url: String,
    /// Free-text description, absent on many repositories.
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language label, absent on empty repositories.
    #[serde(default)]
    pub language: Option<String>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u32,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u32,
    /// True if this repository is a fork of another.
    #[serde(default)]
    pub fork: bool,
    /// Timestamp of the last push.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Builds the listing request URL for an account.
///
/// Results are sorted by most-recently-pushed, descending, with a fixed page
/// size of [`PER_PAGE`].
#[must_use]
pub fn list_url(api_base: &str, username: &str) -> String {
    format!("{api_base}/users/{username}/repos?sort=pushed&direction=desc&per_page={PER_PAGE}")
}

/// Fetches the public repositories of an account.
///
/// Single round trip, no authentication headers, no retry.
///
/// # Errors
///
/// Returns an error if:
/// - the request fails at the transport level (`FolioError::Network`)
/// - GitHub answers with a non-success status (`FolioError::Api`)
/// - the body is not a repository listing (`FolioError::InvalidListing`)
#[instrument(skip(http))]
pub async fn fetch_user_repos(
    http: &Client,
    api_base: &str,
    username: &str,
) -> crate::Result<Vec<Repo>> {
    let url = list_url(api_base, username);
    debug!("Fetching repositories from {}", url);

    let response = http
        .get(&url)
        .header(USER_AGENT, USER_AGENT_VALUE)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FolioError::Api {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_string(),
        });
    }

    let body = response.text().await?;
    let repos: Vec<Repo> = serde_json::from_str(&body).map_err(FolioError::InvalidListing)?;

    debug!("Fetched {} repositories for {}", repos.len(), username);
    Ok(repos)
}
