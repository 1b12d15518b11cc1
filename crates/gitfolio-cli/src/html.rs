// SPDX-License-Identifier: Apache-2.0

//! HTML render target for the static portfolio page.
//!
//! The page template carries the two regions of the display contract: a
//! `status-message` element for status/error text and a `repos-container`
//! grid for the cards. The target fills whichever region the pipeline wrote
//! last and hides the other.

use std::fmt::Write;

use gitfolio_core::{RenderTarget, RepoCard, Status};

/// Embedded page template with `{{title}}`, `{{status}}`, `{{status_hidden}}`
/// and `{{cards}}` substitution points.
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Escapes text for safe interpolation into HTML content and attributes.
///
/// Repository names, descriptions and language labels come from the remote
/// and must never reach the page unescaped.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders one card to markup.
fn render_card(card: &RepoCard) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<article class="card">"#);
    let _ = writeln!(html, "  <div>");
    let _ = writeln!(
        html,
        r#"    <a class="card-name" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(&card.url),
        escape_html(&card.name)
    );
    let _ = writeln!(
        html,
        r#"    <p class="card-description">{}</p>"#,
        escape_html(&card.description)
    );
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "  <div>");
    let _ = writeln!(html, r#"    <div class="card-meta">"#);
    let _ = writeln!(
        html,
        r#"      <span class="language-tag" style="background-color: {}">{}</span>"#,
        card.language_color,
        escape_html(&card.language)
    );
    let _ = writeln!(html, r#"      <span class="stat">&#9733; {}</span>"#, card.stars);
    let _ = writeln!(html, r#"      <span class="stat">&#8916; {}</span>"#, card.forks);
    let _ = writeln!(html, "    </div>");
    let _ = writeln!(
        html,
        r#"    <p class="card-updated">Last updated: {}</p>"#,
        escape_html(&card.updated)
    );
    let _ = writeln!(html, "  </div>");
    let _ = write!(html, "</article>");
    html
}

/// Render target that produces a complete static HTML page.
#[derive(Default)]
pub struct HtmlTarget {
    status: Option<Status>,
    cards_html: Option<String>,
}

impl HtmlTarget {
    /// Creates an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the target and produces the full page.
    ///
    /// Exactly one of the two regions is visible: the status region when the
    /// run ended in a status, the card grid when cards were rendered.
    #[must_use]
    pub fn into_page(self, title: &str) -> String {
        let (status_html, status_hidden) = match &self.status {
            Some(status) => {
                let class = if status.is_error() { "error" } else { "info" };
                (
                    format!(
                        r#"<p class="{class}">{}</p>"#,
                        escape_html(&status.message())
                    ),
                    "",
                )
            }
            None => (String::new(), "hidden"),
        };

        PAGE_TEMPLATE
            .replace("{{title}}", &escape_html(title))
            .replace("{{status_hidden}}", status_hidden)
            .replace("{{status}}", &status_html)
            .replace("{{cards}}", self.cards_html.as_deref().unwrap_or(""))
    }
}

impl RenderTarget for HtmlTarget {
    fn set_status(&mut self, status: &Status) {
        self.cards_html = None;
        self.status = Some(status.clone());
    }

    fn set_cards(&mut self, cards: &[RepoCard]) {
        self.status = None;
        self.cards_html = Some(
            cards
                .iter()
                .map(render_card)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitfolio_core::DEFAULT_LANGUAGE_COLOR;

    fn card() -> RepoCard {
        RepoCard {
            name: "demo".to_string(),
            url: "https://github.com/octocat/demo".to_string(),
            description: "A <great> demo & more".to_string(),
            language: "Rust".to_string(),
            language_color: "#dea584",
            stars: 7,
            forks: 2,
            updated: "May 1, 2024".to_string(),
        }
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn card_markup_links_out_and_escapes() {
        let html = render_card(&card());
        assert!(html.contains(r#"href="https://github.com/octocat/demo""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains("A &lt;great&gt; demo &amp; more"));
        assert!(html.contains("background-color: #dea584"));
        assert!(html.contains("&#9733; 7"));
        assert!(html.contains("&#8916; 2"));
        assert!(html.contains("Last updated: May 1, 2024"));
    }

    #[test]
    fn unknown_language_card_uses_default_color() {
        let mut c = card();
        c.language = "--".to_string();
        c.language_color = DEFAULT_LANGUAGE_COLOR;
        let html = render_card(&c);
        assert!(html.contains(&format!("background-color: {DEFAULT_LANGUAGE_COLOR}")));
    }

    #[test]
    fn page_with_cards_hides_status_region() {
        let mut target = HtmlTarget::new();
        target.set_cards(&[card()]);
        let page = target.into_page("octocat's repositories");

        assert!(page.contains("octocat&#39;s repositories"));
        assert!(page.contains(r#"id="status-message" class="hidden""#));
        assert!(page.contains(r#"class="card""#));
    }

    #[test]
    fn page_with_status_shows_message_and_no_cards() {
        let mut target = HtmlTarget::new();
        target.set_status(&Status::Empty {
            username: "octocat".to_string(),
        });
        let page = target.into_page("portfolio");

        assert!(page.contains("octocat"));
        assert!(page.contains(r#"class="error""#));
        assert!(!page.contains(r#"class="card""#));
        assert!(page.contains(r#"id="repos-container"></div>"#));
    }

    #[test]
    fn later_status_replaces_cards() {
        let mut target = HtmlTarget::new();
        target.set_cards(&[card()]);
        target.set_status(&Status::Failed {
            message: "boom".to_string(),
        });
        let page = target.into_page("portfolio");

        assert!(page.contains("boom"));
        assert!(!page.contains(r#"class="card""#));
    }
}
