// Feed view - heading, card grid, loading line
//
// The grid is sized here each frame: columns from the breakpoint, visible
// rows from the content height. The panel is synced before drawing so the
// scroll position the shell sees matches what is on screen.

use crate::tui::app::App;
use crate::tui::components::article_card::CARD_HEIGHT;
use crate::tui::components::loading_indicator;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HEADING: &str = "Top News Headlines";

/// Heading text with the active category or search term
pub fn heading(app: &App) -> String {
    let term = app.shell.search_term();
    match app.shell.route().category() {
        _ if !term.is_empty() => format!("{} · results for \"{}\"", HEADING, term),
        Some(category) => format!("{} · {}", HEADING, category.label()),
        None => HEADING.to_string(),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading + spacing
            Constraint::Min(1),    // grid
            Constraint::Length(1), // loading line
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        heading(app),
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    f.render_widget(heading, chunks[0]);

    let grid = chunks[1];
    let columns = Breakpoint::from_width(grid.width).grid_columns();
    let viewport_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
    let article_count = app.articles().len();
    let loading = app
        .shell
        .controller()
        .is_some_and(|c| c.is_loading());

    app.feed_panel.sync(article_count, columns, viewport_rows);

    if article_count == 0 {
        if !loading {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No articles to show.",
                Style::default().fg(app.theme.muted),
            )))
            .centered();
            f.render_widget(empty, grid);
        }
    } else {
        app.feed_panel
            .render_grid(f, grid, app.articles(), &app.theme);
    }

    loading_indicator::render_spinner(f, chunks[2], loading, app.animation_frame, &app.theme);
}
