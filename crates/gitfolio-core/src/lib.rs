// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Gitfolio Core
//!
//! Core library for gitfolio - a portfolio view of a GitHub user's public
//! repositories.
//!
//! This crate provides the full fetch-filter-render pipeline:
//! - anonymous GitHub REST listing of an account's repositories
//! - filter and selection (fork exclusion, display limit)
//! - structured card values with language colors and formatted dates
//! - the [`lister::RenderTarget`] abstraction over the two display regions
//! - layered configuration and error types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitfolio_core::{AppConfig, Lister, Outcome, RenderTarget, RepoCard, Status};
//!
//! struct Stdout;
//!
//! impl RenderTarget for Stdout {
//!     fn set_status(&mut self, status: &Status) {
//!         eprintln!("{}", status.message());
//!     }
//!     fn set_cards(&mut self, cards: &[RepoCard]) {
//!         for card in cards {
//!             println!("{} ({})", card.name, card.language);
//!         }
//!     }
//! }
//!
//! # async fn example() -> gitfolio_core::Result<()> {
//! let mut config = AppConfig::default();
//! config.github.username = "octocat".to_string();
//!
//! let lister = Lister::new(config)?;
//! let outcome = lister.run(&mut Stdout).await;
//! assert!(matches!(outcome, Outcome::Rendered(_) | Outcome::Empty));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Error Handling
// ============================================================================

pub use error::FolioError;

/// Convenience Result type for gitfolio operations.
///
/// This is equivalent to `std::result::Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DisplayConfig, GitHubConfig, PLACEHOLDER_USERNAME, config_dir, config_file_path,
    load_config,
};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::repos::{Repo, fetch_user_repos, list_url};

// ============================================================================
// Filter and Selection
// ============================================================================

pub use select::{SelectionFilter, select_repos};

// ============================================================================
// Cards
// ============================================================================

pub use card::{DEFAULT_LANGUAGE_COLOR, NO_DESCRIPTION, NO_LANGUAGE, RepoCard, language_color};

// ============================================================================
// Pipeline
// ============================================================================

pub use lister::{Lister, Outcome, RenderTarget, Status};

// ============================================================================
// Modules
// ============================================================================

pub mod card;
pub mod config;
pub mod error;
pub mod github;
pub mod lister;
pub mod select;
