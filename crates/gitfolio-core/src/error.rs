// SPDX-License-Identifier: Apache-2.0

//! Error types for gitfolio.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while fetching or rendering a repository portfolio.
#[derive(Error, Debug)]
pub enum FolioError {
    /// GitHub answered with a non-success HTTP status.
    #[error("GitHub API error: {status} {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Status text (e.g., "Not Found", "Forbidden").
        message: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a valid repository listing.
    #[error("Invalid repository listing from GitHub")]
    InvalidListing(#[source] serde_json::Error),

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The configured username is still the placeholder value.
    #[error(
        "GitHub username is not configured - set `github.username` in the config file, \
         the GITFOLIO_GITHUB__USERNAME environment variable, or pass --user"
    )]
    Misconfigured,
}

impl From<config::ConfigError> for FolioError {
    fn from(err: config::ConfigError) -> Self {
        FolioError::Config {
            message: err.to_string(),
        }
    }
}
