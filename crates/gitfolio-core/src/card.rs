// SPDX-License-Identifier: Apache-2.0

//! Structured card values for rendering.
//!
//! A [`RepoCard`] is the presentation-ready form of one repository record:
//! placeholders resolved, language color looked up, timestamp formatted.
//! Rendering a card to terminal text or HTML markup is a separate concern
//! owned by the render targets.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::repos::Repo;

/// Placeholder shown when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Placeholder label shown when a repository has no primary language.
pub const NO_LANGUAGE: &str = "--";

/// Neutral color used for unrecognized or absent languages.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

/// Shown when a repository has never been pushed to.
const NEVER_UPDATED: &str = "never";

/// Static language-to-color lookup table.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#563d7c"),
    ("Go", "#00add8"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Kotlin", "#a97bff"),
    ("Python", "#3572a5"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("Swift", "#f05138"),
    ("TypeScript", "#3178c6"),
    ("Vue", "#41b883"),
];

/// Looks up the display color for a language label.
///
/// Unrecognized and absent languages both map to
/// [`DEFAULT_LANGUAGE_COLOR`].
#[must_use]
pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == lang)
                .map(|(_, color)| *color)
        })
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Formats a push timestamp as a short human-readable date.
#[must_use]
pub fn format_pushed_at(pushed_at: Option<&DateTime<Utc>>) -> String {
    match pushed_at {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => NEVER_UPDATED.to_string(),
    }
}

/// Presentation-ready form of one repository record.
#[derive(Debug, Clone, Serialize)]
pub struct RepoCard {
    /// Repository name.
    pub name: String,
    /// Link to the repository's page.
    pub url: String,
    /// Description, or [`NO_DESCRIPTION`] when absent.
    pub description: String,
    /// Primary language label, or [`NO_LANGUAGE`] when absent.
    pub language: String,
    /// Display color for the language label.
    pub language_color: &'static str,
    /// Star count.
    pub stars: u32,
    /// Fork count.
    pub forks: u32,
    /// Formatted last-updated date.
    pub updated: String,
}

impl RepoCard {
    /// Builds a card from a repository record, resolving placeholders and
    /// formatting the push timestamp.
    #[must_use]
    pub fn from_repo(repo: &Repo) -> Self {
        Self {
            name: repo.name.clone(),
            url: repo.html_url.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
            language_color: language_color(repo.language.as_deref()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated: format_pushed_at(repo.pushed_at.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> Repo {
        Repo {
            id: 1,
            name: "demo".to_string(),
            html_url: "https://github.com/octocat/demo".to_string(),
            description: Some("A demo".to_string()),
            language: Some("Rust".to_string()),
            stargazers_count: 7,
            forks_count: 2,
            fork: false,
            pushed_at: Some("2024-05-01T12:00:00Z".parse().expect("valid timestamp")),
        }
    }

    #[test]
    fn known_language_has_mapped_color() {
        assert_eq!(language_color(Some("Rust")), "#dea584");
        assert_eq!(language_color(Some("JavaScript")), "#f1e05a");
    }

    #[test]
    fn unknown_language_uses_default_color() {
        assert_eq!(language_color(Some("Brainfuck")), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn absent_language_uses_default_color() {
        assert_eq!(language_color(None), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn card_carries_record_fields() {
        let card = RepoCard::from_repo(&repo());
        assert_eq!(card.name, "demo");
        assert_eq!(card.url, "https://github.com/octocat/demo");
        assert_eq!(card.description, "A demo");
        assert_eq!(card.language, "Rust");
        assert_eq!(card.language_color, "#dea584");
        assert_eq!(card.stars, 7);
        assert_eq!(card.forks, 2);
        assert_eq!(card.updated, "May 1, 2024");
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let mut r = repo();
        r.description = None;
        assert_eq!(RepoCard::from_repo(&r).description, NO_DESCRIPTION);

        // GitHub sometimes returns the empty string instead of null.
        r.description = Some(String::new());
        assert_eq!(RepoCard::from_repo(&r).description, NO_DESCRIPTION);
    }

    #[test]
    fn missing_language_gets_placeholder_and_default_color() {
        let mut r = repo();
        r.language = None;
        let card = RepoCard::from_repo(&r);
        assert_eq!(card.language, NO_LANGUAGE);
        assert_eq!(card.language_color, DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn missing_pushed_at_formats_as_never() {
        let mut r = repo();
        r.pushed_at = None;
        assert_eq!(RepoCard::from_repo(&r).updated, "never");
    }

    #[test]
    fn any_valid_timestamp_formats_without_panic() {
        for ts in [
            "1970-01-01T00:00:00Z",
            "1999-12-31T23:59:59Z",
            "2024-02-29T06:30:00Z",
            "2262-04-11T23:47:16Z",
        ] {
            let dt: DateTime<Utc> = ts.parse().expect("valid timestamp");
            let formatted = format_pushed_at(Some(&dt));
            assert!(!formatted.is_empty());
        }
    }
}
