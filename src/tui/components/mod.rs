// Components module - reusable UI building blocks
//
// Shell components are rendered on every route:
// - Title bar: app title and route tabs
// - Search bar + progress gauge: one row under the title
// - Status bar: route, counts, hints
// - Logs panel: diagnostics, toggled with `L`
//
// Feed components:
// - Article card: one article, pure line layout
// - Feed panel: the card grid with selection and scroll
// - Loading indicator: spinner under the grid, gauge in the header

pub mod article_card;
pub mod feed_panel;
pub mod formatters;
pub mod loading_indicator;
pub mod logs_panel;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use crate::tui::scroll::FocusablePanel;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the diagnostics panel using the component owned by App
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let focused = app.is_focused(FocusablePanel::Logs);

    app.logs_panel.sync_entries(entries.len(), height);
    app.logs_panel
        .render_with_entries(f, area, &entries, &app.theme, focused);
}
