// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current settings
// - Article modal: every field of one article, description unwrapped

use crate::news::Article;
use crate::tui::app::App;
use crate::tui::components::article_card::byline;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Article(idx) => {
            if let Some(article) = app.articles().get(*idx) {
                render_article(f, app, article, *idx);
            }
        }
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.link);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("0-7", "Home … About"),
        kb("Tab/S-Tab", "Next / previous section"),
        Line::raw(""),
        Line::from(Span::styled("  Headlines", header_style)),
        kb("↑↓←→, hjkl", "Select card (loads more at bottom)"),
        kb("PgUp/PgDn", "Page through the grid"),
        kb("Enter", "Open article"),
        kb("y", "Copy article link"),
        kb("Esc", "Clear selection"),
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("/", "Edit search term"),
        kb("Enter", "Apply (empty clears)"),
        kb("Esc", "Cancel edit"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("L", "Toggle diagnostics"),
        kb("w", "Switch panel focus"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
            Span::styled("  |  Country: ", desc_style),
            Span::styled(app.shell.context().defaults.country.clone(), key_style),
        ]),
    ]);

    let area = centered_rect(48, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Lines of the article modal body
fn article_text(article: &Article, app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let label = Style::default().fg(theme.muted);

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(theme.headline)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(byline(article), Style::default().fg(theme.byline))),
        Line::from(Span::styled(article.published_display(), label)),
        Line::raw(""),
        Line::from(Span::styled(
            article.description.clone(),
            Style::default().fg(theme.foreground),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Link   ", label),
            Span::styled(article.url.clone(), Style::default().fg(theme.link)),
        ]),
    ];
    if let Some(image) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("Image  ", label),
            Span::styled(image.to_string(), Style::default().fg(theme.muted)),
        ]));
    }
    lines
}

fn render_article(f: &mut Frame, app: &App, article: &Article, idx: usize) {
    let frame_area = f.area();
    let width = (frame_area.width * 80 / 100).max(40);
    let height = (frame_area.height * 60 / 100).max(14);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let position = format!(" {}/{} ", idx + 1, app.articles().len());
    let paragraph = Paragraph::new(article_text(article, app))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Article ")
                .title_top(Line::from(position).right_aligned())
                .title_bottom(Line::from(" ←→:prev/next  y:copy link  Esc:close ").centered()),
        );

    f.render_widget(paragraph, area);
}
