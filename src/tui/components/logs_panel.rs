//! Diagnostics panel component
//!
//! Shows the in-memory tracing buffer. Fetch failures never reach the feed
//! view, so this is where they surface. Follows new entries until the user
//! selects one.

use super::formatters::truncate_to_width;
use super::scrollbar::render_scrollbar;
use crate::logging::{LogEntry, LogLevel};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive, Scrollable, Selectable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Tails new entries until the user scrolls or selects
    scroll: ScrollState,

    /// Selected log entry index (None while tailing)
    pub selected: Option<usize>,

    /// Cached entry count (for bounds checking)
    pub entry_count: usize,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::tail(),
            selected: None,
            entry_count: 0,
        }
    }

    /// Sync with the log buffer (call each frame)
    pub fn sync_entries(&mut self, entry_count: usize, viewport_height: usize) {
        self.entry_count = entry_count;
        self.scroll.resize(entry_count, viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entry_count {
                self.selected = entry_count.checked_sub(1);
            }
        }
    }

    pub fn render_with_entries(
        &self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        theme: &Theme,
        focused: bool,
    ) {
        let visible = self.scroll.window();
        let start = visible.start;
        let content_width = area.width.saturating_sub(3) as usize;

        let items: Vec<ListItem> = entries[visible]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let line = truncate_to_width(&format_log_entry(entry), content_width);
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(entry.level, theme)
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let border_color = if focused { theme.highlight } else { theme.border };

        let title = if self.selected.is_some() && focused {
            " Diagnostics [select] "
        } else if self.scroll.is_pinned() {
            " Diagnostics "
        } else {
            " Diagnostics [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, theme, true);
    }

    /// Text of the selected entry (for clipboard)
    pub fn selected_entry_text(&self, entries: &[LogEntry]) -> Option<String> {
        self.selected
            .and_then(|idx| entries.get(idx))
            .map(format_log_entry)
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        let idx = index.min(self.entry_count.saturating_sub(1));
        self.selected = Some(idx);
        self.scroll.reveal(idx);
    }

    fn item_count(&self) -> usize {
        self.entry_count
    }

    /// First selection starts from the most recent entry
    fn entry_point(&self) -> usize {
        self.entry_count.saturating_sub(1)
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::PageUp => self.scroll_pages(-1),
            KeyCode::PageDown => self.scroll_pages(1),
            KeyCode::Esc if self.selected.is_some() => {
                self.selected = None;
                self.scroll.pin();
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy line  Esc:follow")
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warn),
        LogLevel::Info => Style::default().fg(theme.info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.debug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Warn,
            target: "newsgrid::feed".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn first_selection_starts_at_newest() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(10, 4);
        panel.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(panel.selected, Some(9));
        panel.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(panel.selected, Some(8));
    }

    #[test]
    fn esc_returns_to_following() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(10, 4);
        panel.handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert!(!panel.scroll.is_pinned());

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(panel.handle_key(esc), Handled::Yes);
        assert!(panel.scroll.is_pinned());
        assert_eq!(panel.handle_key(esc), Handled::No);
    }

    #[test]
    fn selected_entry_text_includes_level() {
        let entries = vec![entry("fetch failed kind=status")];
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries.len(), 4);
        panel.select_last();
        let text = panel.selected_entry_text(&entries).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.ends_with("fetch failed kind=status"));
    }
}
