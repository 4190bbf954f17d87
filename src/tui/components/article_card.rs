//! Article card
//!
//! Pure mapping from one `Article` to a bordered card. The line layout lives
//! in `card_lines` so it can be checked without a terminal; `render` only
//! wraps it in a block.

use super::formatters::{truncate_to_width, wrap_to_width};
use crate::news::Article;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height in rows, borders included
pub const CARD_HEIGHT: u16 = 9;

const UNKNOWN_AUTHOR: &str = "Unknown";
const UNTITLED: &str = "(untitled)";

/// Lines of one card's interior, `width` columns by at most `height` rows.
///
/// Layout, top to bottom: title, description (fills whatever is left), image
/// URL when present, article URL, byline, publish date. Fixed lines win over
/// the description when space runs out.
pub fn card_lines(article: &Article, theme: &Theme, width: usize, height: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);

    let title = if article.title.trim().is_empty() {
        UNTITLED
    } else {
        article.title.trim()
    };
    let title_line = Line::from(Span::styled(
        truncate_to_width(title, width),
        Style::default()
            .fg(theme.headline)
            .add_modifier(Modifier::BOLD),
    ));

    let mut footer: Vec<Line<'static>> = Vec::new();
    if let Some(image) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
        footer.push(labeled("Image ", image, label, Style::default().fg(theme.muted), width));
    }
    footer.push(labeled("Read  ", &article.url, label, Style::default().fg(theme.link), width));
    footer.push(Line::from(Span::styled(
        truncate_to_width(&byline(article), width),
        Style::default().fg(theme.byline),
    )));
    footer.push(Line::from(Span::styled(
        truncate_to_width(&article.published_display(), width),
        label,
    )));

    let mut lines = vec![title_line];
    let room = height.saturating_sub(1 + footer.len());
    lines.extend(
        wrap_to_width(&article.description, width, room)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.foreground)))),
    );
    // Pad so the footer sits on the card's bottom edge
    while lines.len() < height.saturating_sub(footer.len()) {
        lines.push(Line::raw(""));
    }
    lines.extend(footer);
    lines.truncate(height);
    lines
}

/// "By <author> · <source>", with a placeholder for unknown authors
pub fn byline(article: &Article) -> String {
    let author = article
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR);
    match article.source_name() {
        Some(source) if !source.is_empty() => format!("By {} · {}", author, source),
        _ => format!("By {}", author),
    }
}

fn labeled(name: &'static str, value: &str, name_style: Style, value_style: Style, width: usize) -> Line<'static> {
    let room = width.saturating_sub(name.len());
    Line::from(vec![
        Span::styled(name, name_style),
        Span::styled(truncate_to_width(value, room), value_style),
    ])
}

/// Draw one card into `area`
pub fn render(f: &mut Frame, area: Rect, article: &Article, theme: &Theme, selected: bool) {
    let border = if selected { theme.highlight } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    let lines = card_lines(article, theme, inner.width as usize, inner.height as usize);

    let mut paragraph = Paragraph::new(lines).block(block);
    if selected {
        paragraph = paragraph.style(Style::default().bg(theme.selection));
    }
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn card_shows_every_field_in_order() {
        let mut article = Article::sample(3);
        article.image_url = Some("https://img.example/3.jpg".to_string());
        let lines = text(&card_lines(&article, &Theme::dark(), 60, 7));

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Headline 3");
        assert_eq!(lines[1], "Description for story 3");
        assert_eq!(lines[3], "Image https://img.example/3.jpg");
        assert_eq!(lines[4], "Read  https://news.example/3");
        assert_eq!(lines[5], "By Staff");
        assert_eq!(lines[6], "Mar 01, 2024 12:00 UTC");
    }

    #[test]
    fn missing_author_reads_unknown() {
        let mut article = Article::sample(1);
        article.author = None;
        assert_eq!(byline(&article), "By Unknown");

        article.author = Some("  ".to_string());
        assert_eq!(byline(&article), "By Unknown");
    }

    #[test]
    fn image_line_only_when_present() {
        let article = Article::sample(1);
        let lines = text(&card_lines(&article, &Theme::dark(), 60, 7));
        assert!(lines.iter().all(|l| !l.starts_with("Image")));
        assert_eq!(lines[6], "Mar 01, 2024 12:00 UTC");
    }

    #[test]
    fn long_text_is_cut_to_the_card() {
        let mut article = Article::sample(1);
        article.title = "A very long headline that cannot fit on one narrow card".to_string();
        article.description = "word ".repeat(50);
        let lines = text(&card_lines(&article, &Theme::dark(), 20, 7));

        assert_eq!(lines.len(), 7);
        assert!(lines[0].ends_with('…'));
        assert!(lines[3].ends_with('…'), "description overflow marked: {:?}", lines);
        for line in &lines {
            assert!(unicode_width::UnicodeWidthStr::width(line.as_str()) <= 20, "{line:?}");
        }
    }

    #[test]
    fn unparseable_date_shown_verbatim() {
        let mut article = Article::sample(1);
        article.published_at = "yesterday".to_string();
        let lines = text(&card_lines(&article, &Theme::dark(), 40, 7));
        assert_eq!(lines.last().map(String::as_str), Some("yesterday"));
    }
}
