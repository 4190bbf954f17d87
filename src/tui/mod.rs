// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, settled fetches)
// - Spawning the fetches the App queues
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::events::{spawn_fetch, AppEvent};
use crate::logging::LogBuffer;
use crate::news::NewsClient;
use crate::shell::{Route, Shell};
use anyhow::{Context, Result};
use app::App;
use components::toast::{Toast, ToastKind};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::Scrollable;

/// Capacity of the settled-fetch channel
const EVENT_CHANNEL_SIZE: usize = 64;

/// Run the TUI until the user quits
pub async fn run_tui(
    config: Config,
    client: NewsClient,
    shell: Shell,
    log_buffer: LogBuffer,
    initial_route: Route,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(shell, log_buffer, &config);
    app.start(initial_route);

    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Settled fetches from background tasks
///
/// After each wakeup the App's outbox is drained into new fetch tasks, so
/// feed state is only ever mutated here.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: NewsClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(EVENT_CHANNEL_SIZE);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));

    loop {
        for ticket in app.take_pending() {
            tracing::debug!(
                generation = ticket.generation.value(),
                page = ticket.query.page,
                "spawning fetch"
            );
            spawn_fetch(client.clone(), ticket, tx.clone());
        }

        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(event) = rx.recv() => {
                app.handle_event(event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search input → Global → Focused panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Search input captures typing while open
    if app.search.is_active() {
        app.handle_search_key(key_event);
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Focused panel; Enter on the grid opens the article
    if key_event.code == KeyCode::Enter {
        if app.is_focused(scroll::FocusablePanel::Feed) {
            app.open_selected_article();
        }
        return;
    }
    app.dispatch_to_focused(key_event);
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => match app.focused {
            scroll::FocusablePanel::Feed => {
                app.feed_panel.scroll_lines(-1);
                app.on_feed_scrolled();
            }
            scroll::FocusablePanel::Logs => app.logs_panel.scroll_lines(-1),
        },
        MouseEventKind::ScrollDown => match app.focused {
            scroll::FocusablePanel::Feed => {
                app.feed_panel.scroll_lines(1);
                app.on_feed_scrolled();
            }
            scroll::FocusablePanel::Logs => app.logs_panel.scroll_lines(1),
        },
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal.as_ref() else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Step(delta) => app.step_article(delta),
        ModalAction::CopyLink => copy_current(app),
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('y') => copy_current(app),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('w') => app.cycle_focus(),
        KeyCode::Tab => app.navigate(app.shell.route().next()),
        KeyCode::BackTab => app.navigate(app.shell.route().prev()),
        KeyCode::Char(c @ '0'..='7') => {
            let index = c as usize - '0' as usize;
            if let Some(route) = Route::from_index(index) {
                app.navigate(route);
            }
        }
        _ => return false,
    }
    true
}

/// `y`: copy whatever is selected and report it in a toast
fn copy_current(app: &mut App) {
    match app.copy_target() {
        Some((text, what)) => app.show_toast(clipboard::copy_with_feedback(&text, what)),
        None => app.show_toast(Toast::new(ToastKind::Notice, "Nothing selected")),
    }
}
