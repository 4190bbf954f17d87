// About page - the one route without a feed

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let heading = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(theme.foreground);
    let muted = Style::default().fg(theme.muted);

    let key_status = if app.has_api_key {
        Span::styled("configured", Style::default().fg(theme.progress))
    } else {
        Span::styled(
            "missing (set NEWS_API_KEY or api_key in the config file)",
            Style::default().fg(theme.warn),
        )
    };

    let text = vec![
        Line::from(Span::styled(format!("About {}", app.title), heading)),
        Line::raw(""),
        Line::from(Span::styled(
            "A terminal news reader. Pick a section with 0-7 or Tab, search with /, \
             and keep scrolling: the next page of headlines loads as you reach the bottom.",
            body,
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Headlines are provided by NewsAPI (newsapi.org). Each card carries \
             the article link; select a card and press y to copy it.",
            body,
        )),
        Line::raw(""),
        Line::from(vec![Span::styled("Endpoint: ", muted), Span::styled(
            app.shell.context().base_url.to_string(),
            body,
        )]),
        Line::from(vec![Span::styled("Country:  ", muted), Span::styled(
            app.shell.context().defaults.country.clone(),
            body,
        )]),
        Line::from(vec![Span::styled("API key:  ", muted), key_status]),
        Line::raw(""),
        Line::from(Span::styled(
            format!("newsgrid {}", crate::config::VERSION),
            muted,
        )),
    ];

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(2)),
    );
    f.render_widget(paragraph, area);
}
