//! Feed panel component
//!
//! Owns the card grid's scroll position and selection. Scrolling is measured
//! in card rows, so the near-bottom threshold is a number of rows. The panel
//! never holds articles: the mounted controller does, and the panel is synced
//! with the article count each frame.

use super::article_card::{self, CARD_HEIGHT};
use super::scrollbar::render_scrollbar;
use crate::feed::ScrollPosition;
use crate::news::Article;
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive, Scrollable, Selectable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct FeedPanel {
    /// Scroll state in card rows
    scroll: ScrollState,

    /// Selected article index (None until the user moves)
    pub selected: Option<usize>,

    /// Cards per row at the last sync
    columns: usize,

    /// Articles held by the controller at the last sync
    article_count: usize,
}

impl FeedPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: None,
            columns: 1,
            article_count: 0,
        }
    }

    /// Fresh feed mounted: back to the top with nothing selected
    pub fn reset(&mut self) {
        self.scroll.reset();
        self.selected = None;
        self.article_count = 0;
    }

    /// Sync with the controller's article count and the grid geometry
    pub fn sync(&mut self, article_count: usize, columns: usize, viewport_rows: usize) {
        self.article_count = article_count;
        self.columns = columns.max(1);
        self.scroll.resize(self.row_count(), viewport_rows.max(1));

        if let Some(idx) = self.selected {
            if idx >= article_count {
                self.selected = article_count.checked_sub(1);
            }
        }
    }

    /// Current geometry for the near-bottom check
    pub fn position(&self) -> ScrollPosition {
        self.scroll.position()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.article_count.div_ceil(self.columns)
    }

    /// Render the visible card rows, with each row split into columns
    pub fn render_grid(&self, f: &mut Frame, area: Rect, articles: &[Article], theme: &Theme) {
        let visible = self.scroll.window();
        let rows: Vec<Constraint> = visible
            .clone()
            .map(|_| Constraint::Length(CARD_HEIGHT))
            .collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(rows)
            .split(area);

        let columns: Vec<Constraint> = (0..self.columns)
            .map(|_| Constraint::Ratio(1, self.columns as u32))
            .collect();

        for (row, row_area) in visible.zip(row_areas.iter()) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(columns.clone())
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let idx = row * self.columns + col;
                if let Some(article) = articles.get(idx) {
                    article_card::render(f, *cell, article, theme, self.selected == Some(idx));
                }
            }
        }

        render_scrollbar(f, area, &self.scroll, theme, false);
    }
}

impl Default for FeedPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollable for FeedPanel {
    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for FeedPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selecting a card scrolls its row into view
    fn select(&mut self, index: usize) {
        let idx = index.min(self.article_count.saturating_sub(1));
        self.selected = Some(idx);
        self.scroll.reveal(idx / self.columns);
    }

    fn item_count(&self) -> usize {
        self.article_count
    }
}

impl Interactive for FeedPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let row = self.columns as isize;
        let page = row * self.scroll.viewport().max(1) as isize;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-row),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(row),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-page),
            KeyCode::PageDown => self.move_selection(page),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Esc if self.selected.is_some() => self.selected = None,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓←→:select  Enter:open  y:copy link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn rows_follow_column_count() {
        let mut panel = FeedPanel::new();
        panel.sync(7, 3, 2);
        assert_eq!(panel.position().total, 3);
        assert_eq!(panel.position().viewport, 2);
        assert_eq!(panel.position().offset, 0);
    }

    #[test]
    fn down_moves_one_row_and_scrolls_into_view() {
        let mut panel = FeedPanel::new();
        panel.sync(12, 2, 2);

        assert_eq!(panel.handle_key(key(KeyCode::Down)), Handled::Yes);
        assert_eq!(panel.selected, Some(0));

        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected, Some(4));
        // Row 2 of 6 is visible with a two-row viewport starting at row 1
        assert_eq!(panel.position().offset, 1);
    }

    #[test]
    fn selection_stops_at_last_article() {
        let mut panel = FeedPanel::new();
        panel.sync(5, 2, 2);
        panel.handle_key(key(KeyCode::End));
        assert_eq!(panel.selected, Some(4));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected, Some(4));
        panel.handle_key(key(KeyCode::Right));
        assert_eq!(panel.selected, Some(4));
    }

    #[test]
    fn end_reaches_near_bottom() {
        let mut panel = FeedPanel::new();
        panel.sync(20, 2, 3);
        assert!(!panel.position().is_near_bottom(1));

        panel.handle_key(key(KeyCode::End));
        assert!(panel.position().is_near_bottom(1));
    }

    #[test]
    fn appended_page_keeps_view_in_place() {
        let mut panel = FeedPanel::new();
        panel.sync(6, 2, 2);
        panel.handle_key(key(KeyCode::End));
        let before = panel.position().offset;

        panel.sync(12, 2, 2);
        assert_eq!(panel.position().offset, before);
        assert_eq!(panel.position().total, 6);
        assert_eq!(panel.selected, Some(5));
    }

    #[test]
    fn reset_clears_selection() {
        let mut panel = FeedPanel::new();
        panel.sync(6, 2, 2);
        panel.handle_key(key(KeyCode::Down));
        panel.reset();
        assert_eq!(panel.selected, None);
        assert_eq!(panel.position().offset, 0);
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn empty_feed_ignores_navigation() {
        let mut panel = FeedPanel::new();
        panel.sync(0, 2, 2);
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::End));
        assert_eq!(panel.selected, None);
    }
}
