// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Centralizes all output formatting logic, supporting text, JSON, and
//! markdown formats. Command handlers return data; this module handles
//! presentation.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{OutputContext, OutputFormat};
use crate::commands::types::ListResult;

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Generic render function - handles JSON via serde, delegates text/markdown
/// to the trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(&mut io::stdout(), ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

impl Renderable for ListResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!("Public repositories of {}:", self.username)).bold()
        )?;
        writeln!(w)?;

        for card in &self.cards {
            writeln!(
                w,
                "  {} {}",
                style(&card.name).cyan().bold(),
                style(format!("({})", card.language)).yellow()
            )?;
            writeln!(w, "    {}", style(&card.description).dim())?;
            writeln!(
                w,
                "    {} stars, {} forks, updated {}",
                card.stars, card.forks, card.updated
            )?;
            writeln!(w, "    {}", style(&card.url).underlined())?;
            writeln!(w)?;
        }

        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## {}'s repositories\n", self.username)?;
        for card in &self.cards {
            writeln!(
                w,
                "- **[{}]({})** ({}) - {} ({} stars, {} forks, updated {})",
                card.name,
                card.url,
                card.language,
                card.description,
                card.stars,
                card.forks,
                card.updated
            )?;
        }
        Ok(())
    }
}

// Special handling for ListResult so JSON output is the bare card array.
impl ListResult {
    /// Renders this result in the context's format.
    pub fn render_with_context(&self, ctx: &OutputContext) -> Result<()> {
        match ctx.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&self.cards)
                        .context("Failed to serialize cards to JSON")?
                );
                Ok(())
            }
            _ => render(self, ctx),
        }
    }
}
