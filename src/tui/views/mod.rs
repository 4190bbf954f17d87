// Views module - screen-level rendering logic
//
// Every route shares the same shell: title bar, search row, content, optional
// diagnostics panel, status bar. The content slot shows the card grid for
// feed routes and the about page for `/about`.

mod about;
mod feed;
mod modal;

use super::app::App;
use crate::shell::Route;
use crate::tui::components::{self, loading_indicator};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the diagnostics panel when shown
const LOGS_HEIGHT: u16 = 10;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),    // title + tabs
            Constraint::Length(1),    // search + progress
            Constraint::Min(5),       // content
            Constraint::Length(logs), // diagnostics
            Constraint::Length(2),    // status
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);
    app.search
        .render(f, search_row[0], app.shell.search_term(), &app.theme);
    loading_indicator::render_progress(
        f,
        search_row[1],
        app.shell.progress(),
        app.animation_frame,
        &app.theme,
    );

    match app.shell.route() {
        Route::About => about::render(f, chunks[2], app),
        _ => feed::render(f, chunks[2], app),
    }

    if app.show_logs {
        components::render_logs_panel(f, chunks[3], app);
    }

    components::render_status(f, chunks[4], app);

    // Modal overlay on top of everything
    if let Some(modal_state) = app.modal.clone() {
        modal::render(f, &modal_state, app);
    }

    // Toast on top of the modal too
    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }

    app.clear_expired_toast();
}
