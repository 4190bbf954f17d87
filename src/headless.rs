// Headless mode - print feed cards as plain text
//
// Drives the same Shell the TUI uses, but awaits each fetch inline instead
// of spawning it. Further pages are requested through the scroll path with
// the viewport pinned to the bottom of what has loaded so far.

use crate::feed::{ScrollPosition, Settled};
use crate::news::{Article, NewsClient};
use crate::shell::{Route, Shell};
use crate::tui::components::article_card::byline;
use crate::tui::components::formatters::wrap_to_width;
use anyhow::{bail, Result};
use std::io::Write;

/// Text width for descriptions
const WRAP_WIDTH: usize = 76;

/// Longest description printed, in lines
const MAX_DESCRIPTION_LINES: usize = 6;

/// Fetch up to `pages` pages for `route` and print them to stdout
pub async fn run(
    client: &NewsClient,
    mut shell: Shell,
    route: Route,
    search: Option<&str>,
    pages: u32,
) -> Result<()> {
    // Set before mounting so the first request already carries the term
    if let Some(term) = search {
        shell.set_search(term);
    }

    let Some(mut next) = shell.start(route) else {
        bail!("{} has no headlines to print", route);
    };

    let mut fetched = 0;
    loop {
        let ticket = next;
        let result = client.get(ticket.url.clone()).await;
        fetched += 1;

        if let Settled::Failed = shell.complete(&ticket, result) {
            let reason = shell
                .controller()
                .and_then(|c| c.last_error())
                .unwrap_or("unknown error")
                .to_string();
            if shell.controller().map_or(true, |c| c.articles().is_empty()) {
                bail!("There was a problem with the fetch operation: {}", reason);
            }
            tracing::warn!(page = ticket.query.page, "stopping early: {}", reason);
            break;
        }

        if fetched >= pages {
            break;
        }
        let held = shell.controller().map_or(0, |c| c.articles().len());
        match shell.on_scroll(bottom_of(held)) {
            Some(ticket) => next = ticket,
            None => break,
        }
    }

    let articles = shell
        .controller()
        .map(|c| c.articles().to_vec())
        .unwrap_or_default();
    tracing::info!(articles = articles.len(), pages = fetched, "headlines fetched");

    let mut out = std::io::stdout().lock();
    if articles.is_empty() {
        writeln!(out, "No articles to show.")?;
    }
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", format_card(article))?;
    }
    out.flush()?;
    Ok(())
}

/// Scroll position with everything loaded on screen
fn bottom_of(rows: usize) -> ScrollPosition {
    ScrollPosition {
        offset: 0,
        viewport: rows,
        total: rows,
    }
}

/// One article as plain text
pub fn format_card(article: &Article) -> String {
    let mut card = String::new();
    let title = if article.title.is_empty() {
        "(untitled)"
    } else {
        article.title.as_str()
    };
    card.push_str(title);
    card.push('\n');

    for line in wrap_to_width(&article.description, WRAP_WIDTH, MAX_DESCRIPTION_LINES) {
        card.push_str("  ");
        card.push_str(&line);
        card.push('\n');
    }
    if let Some(image) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
        card.push_str(&format!("  Image {}\n", image));
    }
    card.push_str(&format!("  Read  {}\n", article.url));
    card.push_str(&format!("  {}\n", byline(article)));
    card.push_str(&format!("  {}\n", article.published_display()));
    card
}
