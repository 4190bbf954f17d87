// TUI application state
//
// App owns the navigation shell (and through it the mounted feed), the panel
// components, and overlay state. It never performs I/O: fetch tickets handed
// out by the shell are queued in an outbox that the event loop drains into
// background tasks, and settled fetches come back through `handle_event`.

use super::components::feed_panel::FeedPanel;
use super::components::logs_panel::LogsPanel;
use super::components::search_bar::{SearchAction, SearchBar};
use super::components::Toast;
use super::modal::Modal;
use super::scroll::FocusablePanel;
use super::theme::Theme;
use super::traits::{Handled, Interactive, Selectable};
use crate::config::Config;
use crate::events::AppEvent;
use crate::feed::{FetchTicket, Settled};
use crate::logging::LogBuffer;
use crate::news::Article;
use crate::shell::{Route, Shell};
use crossterm::event::KeyEvent;

pub struct App {
    /// Routes, search term, and the mounted feed
    pub shell: Shell,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Header title
    pub title: String,

    /// Whether an API key is configured (shown in the status bar)
    pub has_api_key: bool,

    pub feed_panel: FeedPanel,
    pub logs_panel: LogsPanel,
    pub search: SearchBar,

    /// Diagnostics panel visibility
    pub show_logs: bool,

    /// Panel receiving navigation keys
    pub focused: FocusablePanel,

    /// Active overlay; takes all input while open
    pub modal: Option<Modal>,

    pub toast: Option<Toast>,

    /// Animation frame counter for spinners
    pub animation_frame: usize,

    pub should_quit: bool,

    /// Tickets waiting to be spawned by the event loop
    pending: Vec<FetchTicket>,
}

impl App {
    pub fn new(shell: Shell, log_buffer: LogBuffer, config: &Config) -> Self {
        Self {
            shell,
            log_buffer,
            theme: Theme::by_name(&config.theme),
            title: config.title.clone(),
            has_api_key: config.has_api_key(),
            feed_panel: FeedPanel::new(),
            logs_panel: LogsPanel::new(),
            search: SearchBar::new(),
            show_logs: false,
            focused: FocusablePanel::Feed,
            modal: None,
            toast: None,
            animation_frame: 0,
            should_quit: false,
            pending: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Feed orchestration
    // ─────────────────────────────────────────────────────────────

    /// Mount the initial route
    pub fn start(&mut self, route: Route) {
        let ticket = self.shell.start(route);
        self.queue(ticket);
    }

    /// Switch routes; a different route gets a fresh grid
    pub fn navigate(&mut self, route: Route) {
        if route == self.shell.route() {
            return;
        }
        self.feed_panel.reset();
        self.modal = None;
        let ticket = self.shell.navigate(route);
        self.queue(ticket);
    }

    pub fn open_search(&mut self) {
        let current = self.shell.search_term().to_string();
        self.search.open(&current);
    }

    /// Route a key to the open search input
    pub fn handle_search_key(&mut self, key: KeyEvent) {
        match self.search.handle_key(key) {
            SearchAction::Submit(term) => self.submit_search(&term),
            SearchAction::Cancel | SearchAction::Editing => {}
        }
    }

    /// Apply a search term to the shell; a changed filter resets the grid
    pub fn submit_search(&mut self, term: &str) {
        let ticket = self.shell.set_search(term);
        if ticket.is_some() {
            self.feed_panel.reset();
        }
        self.queue(ticket);
    }

    /// Feed scroll moved: ask the shell whether another page is due
    pub fn on_feed_scrolled(&mut self) {
        let position = self.feed_panel.position();
        let ticket = self.shell.on_scroll(position);
        self.queue(ticket);
    }

    /// Apply a background event to state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FetchSettled { ticket, result } => {
                if let Settled::Merged { added } = self.shell.complete(&ticket, result) {
                    tracing::debug!(added, page = ticket.query.page, "feed page merged");
                }
            }
        }
    }

    /// Drain tickets for the event loop to spawn
    pub fn take_pending(&mut self) -> Vec<FetchTicket> {
        std::mem::take(&mut self.pending)
    }

    fn queue(&mut self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            self.pending.push(ticket);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Panels and focus
    // ─────────────────────────────────────────────────────────────

    pub fn articles(&self) -> &[Article] {
        self.shell
            .controller()
            .map(|c| c.articles())
            .unwrap_or(&[])
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.feed_panel
            .selected
            .and_then(|idx| self.articles().get(idx))
    }

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    /// Show or hide the diagnostics panel; showing it focuses it
    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        self.focused = if self.show_logs {
            FocusablePanel::Logs
        } else {
            FocusablePanel::Feed
        };
    }

    /// Move focus between the grid and the diagnostics panel
    pub fn cycle_focus(&mut self) {
        if !self.show_logs {
            return;
        }
        self.focused = match self.focused {
            FocusablePanel::Feed => FocusablePanel::Logs,
            FocusablePanel::Logs => FocusablePanel::Feed,
        };
    }

    /// Route a navigation key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Feed => {
                let handled = self.feed_panel.handle_key(key);
                if handled.consumed() {
                    self.on_feed_scrolled();
                }
                handled
            }
            FocusablePanel::Logs => {
                self.logs_panel.entry_count = self.log_buffer.len();
                self.logs_panel.handle_key(key)
            }
        }
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            FocusablePanel::Feed => self.feed_panel.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Open the detail modal for the selected card
    pub fn open_selected_article(&mut self) {
        if let Some(idx) = self.feed_panel.selected {
            if idx < self.articles().len() {
                self.modal = Some(Modal::article(idx));
            }
        }
    }

    /// Move the article modal to a neighbouring card, selecting it in the
    /// grid so paging past the last card loads more
    pub fn step_article(&mut self, delta: isize) {
        let Some(Modal::Article(idx)) = self.modal else {
            return;
        };
        let count = self.articles().len();
        if count == 0 {
            return;
        }
        let next = idx.saturating_add_signed(delta).min(count - 1);
        self.feed_panel.select(next);
        self.modal = Some(Modal::article(next));
        self.on_feed_scrolled();
    }

    /// Text for `y`: the article link, or the selected log line
    pub fn copy_target(&self) -> Option<(String, &'static str)> {
        if let Some(Modal::Article(idx)) = self.modal {
            return self.articles().get(idx).map(|a| (a.url.clone(), "link"));
        }
        match self.focused {
            FocusablePanel::Feed => self.selected_article().map(|a| (a.url.clone(), "link")),
            FocusablePanel::Logs => self
                .logs_panel
                .selected_entry_text(&self.log_buffer.get_all())
                .map(|text| (text, "log line")),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Overlays and animation
    // ─────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::expired) {
            self.toast = None;
        }
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedContext;
    use crate::news::{FeedResponse, FetchError};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let shell = Shell::new(FeedContext::for_tests());
        App::new(shell, LogBuffer::new(), &Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn settle(app: &mut App, ticket: FetchTicket, range: std::ops::Range<usize>, total: usize) {
        let result = Ok(FeedResponse {
            status: Some("ok".to_string()),
            total_results: total,
            articles: range.map(Article::sample).collect(),
        });
        app.handle_event(AppEvent::FetchSettled { ticket, result });
    }

    #[test]
    fn start_queues_first_page() {
        let mut app = app();
        app.start(Route::Business);
        let pending = app.take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].query.page, 1);
        assert!(app.take_pending().is_empty());
    }

    #[test]
    fn settled_fetch_fills_grid() {
        let mut app = app();
        app.start(Route::Home);
        let ticket = app.take_pending().remove(0);
        settle(&mut app, ticket, 0..6, 30);
        assert_eq!(app.articles().len(), 6);
        assert_eq!(app.shell.progress().outstanding(), 0);
    }

    #[test]
    fn scrolling_to_bottom_requests_next_page() {
        let mut app = app();
        app.start(Route::Home);
        let ticket = app.take_pending().remove(0);
        settle(&mut app, ticket, 0..6, 30);

        // 3 rows of 2 cards, 1 row visible
        app.feed_panel.sync(6, 2, 1);
        app.dispatch_to_focused(key(KeyCode::Down));
        assert!(app.take_pending().is_empty(), "row 0 is far from the bottom");

        app.dispatch_to_focused(key(KeyCode::End));
        let pending = app.take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].query.page, 2);

        // Still loading: further scrolling asks for nothing
        app.dispatch_to_focused(key(KeyCode::Up));
        app.dispatch_to_focused(key(KeyCode::End));
        assert!(app.take_pending().is_empty());
    }

    #[test]
    fn navigate_resets_grid_and_queues_fetch() {
        let mut app = app();
        app.start(Route::Home);
        let ticket = app.take_pending().remove(0);
        settle(&mut app, ticket, 0..6, 30);
        app.feed_panel.sync(6, 2, 3);
        app.dispatch_to_focused(key(KeyCode::Down));
        assert!(app.selected_article().is_some());
        // Whole grid fits, so that move already asked for page 2
        assert_eq!(app.take_pending().len(), 1);

        app.navigate(Route::Sports);
        assert_eq!(app.feed_panel.selected, None);
        assert!(app.articles().is_empty());
        let pending = app.take_pending();
        assert_eq!(pending.len(), 1);

        // Same route again: nothing
        app.navigate(Route::Sports);
        assert!(app.take_pending().is_empty());
    }

    #[test]
    fn search_submit_refetches_active_feed() {
        let mut app = app();
        app.start(Route::Business);
        app.take_pending();

        app.open_search();
        for c in "election".chars() {
            app.handle_search_key(key(KeyCode::Char(c)));
        }
        app.handle_search_key(key(KeyCode::Enter));

        assert_eq!(app.shell.search_term(), "election");
        let pending = app.take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].url.path(), "/v2/everything");
    }

    #[test]
    fn cancelled_search_changes_nothing() {
        let mut app = app();
        app.start(Route::Business);
        app.take_pending();

        app.open_search();
        app.handle_search_key(key(KeyCode::Char('x')));
        app.handle_search_key(key(KeyCode::Esc));
        assert_eq!(app.shell.search_term(), "");
        assert!(app.take_pending().is_empty());
    }

    #[test]
    fn failed_fetch_is_logged_not_shown() {
        let mut app = app();
        app.start(Route::Home);
        let ticket = app.take_pending().remove(0);
        app.handle_event(AppEvent::FetchSettled {
            ticket,
            result: Err(FetchError::Transport("connection refused".into())),
        });
        assert!(app.articles().is_empty());
        let controller = app.shell.controller().unwrap();
        assert!(!controller.is_loading());
        assert!(controller.last_error().is_some());
    }

    #[test]
    fn copy_target_is_selected_link() {
        let mut app = app();
        app.start(Route::Home);
        let ticket = app.take_pending().remove(0);
        settle(&mut app, ticket, 0..4, 4);
        app.feed_panel.sync(4, 2, 2);
        assert!(app.copy_target().is_none());

        app.dispatch_to_focused(key(KeyCode::Right));
        let (text, what) = app.copy_target().unwrap();
        assert_eq!(text, "https://news.example/0");
        assert_eq!(what, "link");

        app.open_selected_article();
        assert!(matches!(app.modal, Some(Modal::Article(0))));

        app.step_article(1);
        assert_eq!(app.modal, Some(Modal::Article(1)));
        assert_eq!(app.feed_panel.selected, Some(1));
        app.step_article(-5);
        assert_eq!(app.modal, Some(Modal::Article(0)));
    }

    #[test]
    fn logs_toggle_moves_focus() {
        let mut app = app();
        app.cycle_focus();
        assert!(app.is_focused(FocusablePanel::Feed), "no logs panel to focus");

        app.toggle_logs();
        assert!(app.is_focused(FocusablePanel::Logs));
        app.cycle_focus();
        assert!(app.is_focused(FocusablePanel::Feed));

        app.toggle_logs();
        assert!(!app.show_logs);
        assert!(app.is_focused(FocusablePanel::Feed));
    }
}
