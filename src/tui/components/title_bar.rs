// Title bar component
//
// App title in the border, route tabs inside. The active route is
// highlighted; digits match the number-key shortcuts.

use crate::shell::Route;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab titles; narrow terminals drop the digit prefix
pub fn tab_titles(bp: Breakpoint) -> Vec<String> {
    Route::all()
        .iter()
        .enumerate()
        .map(|(i, route)| {
            if bp.at_least(Breakpoint::Wide) {
                format!("{} {}", i, route.label())
            } else {
                route.label().to_string()
            }
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title))
        .title(Line::styled(
            format!(" {} ", app.title),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(" ? ").right_aligned());

    let tabs = Tabs::new(tab_titles(bp))
        .select(app.shell.route().index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .block(block);

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cover_every_route() {
        let wide = tab_titles(Breakpoint::Wide);
        assert_eq!(wide.len(), Route::all().len());
        assert_eq!(wide[0], "0 Home");
        assert_eq!(wide[7], "7 About");
        assert_eq!(tab_titles(Breakpoint::Compact)[1], "Business");
    }
}
