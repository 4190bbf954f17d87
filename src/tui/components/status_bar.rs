// Status bar component
//
// Bottom line: route, article count against the reported total, page,
// diagnostics count, and key hints for the focused panel.

use super::formatters::{format_compact_number, format_number};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLOBAL_HINT: &str = "/:search  0-7:section  L:diagnostics  ?:help  q:quit";

/// Text of the left-hand summary
pub fn summary(app: &App, bp: Breakpoint) -> String {
    let route = app.shell.route();
    let mut parts = vec![route.path().to_string()];

    if let Some(controller) = app.shell.controller() {
        let held = controller.articles().len() as u64;
        let total = controller.total_results() as u64;
        if bp.at_least(Breakpoint::Wide) {
            parts.push(format!(
                "{} of {} articles",
                format_number(held),
                format_number(total)
            ));
            parts.push(format!("page {}", controller.page()));
        } else {
            parts.push(format!("{}/{}", held, format_compact_number(total)));
        }
    }

    if !app.shell.search_term().is_empty() {
        parts.push(format!("\"{}\"", app.shell.search_term()));
    }
    if !app.has_api_key {
        parts.push("no API key".to_string());
    }
    let problems = app.log_buffer.problem_count();
    if problems > 0 {
        parts.push(format!("⚠ {}", problems));
    }

    format!(" {}", parts.join(" │ "))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let theme = &app.theme;

    let mut spans = vec![Span::styled(
        summary(app, bp),
        Style::default().fg(theme.status_bar),
    )];
    if bp.at_least(Breakpoint::Normal) {
        let hint = app.focus_hint().unwrap_or(GLOBAL_HINT);
        spans.push(Span::styled(
            format!("   {}", hint),
            Style::default().fg(theme.muted),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::feed::FeedContext;
    use crate::logging::LogBuffer;
    use crate::shell::{Route, Shell};

    #[test]
    fn summary_reports_route_and_missing_key() {
        let shell = Shell::new(FeedContext::for_tests());
        let mut app = App::new(shell, LogBuffer::new(), &Config::default());
        app.start(Route::Science);
        app.submit_search("fusion");

        let text = summary(&app, Breakpoint::Wide);
        assert!(text.starts_with(" /science"));
        assert!(text.contains("0 of 0 articles"));
        assert!(text.contains("page 1"));
        assert!(text.contains("\"fusion\""));
        assert!(text.contains("no API key"));
    }

    #[test]
    fn about_has_no_counts() {
        let shell = Shell::new(FeedContext::for_tests());
        let mut app = App::new(shell, LogBuffer::new(), &Config::default());
        app.start(Route::About);
        let text = summary(&app, Breakpoint::Compact);
        assert!(text.starts_with(" /about"));
        assert!(!text.contains("articles"));
    }
}
