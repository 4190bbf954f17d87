//! Header search control
//!
//! `/` opens the input pre-filled with the current term; `Enter` submits,
//! `Esc` abandons the edit. Submitting an empty input clears the search.

use crate::tui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Outcome of one key while the search input is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Keep editing
    Editing,
    /// Apply this term (already trimmed; may be empty)
    Submit(String),
    /// Closed without applying
    Cancel,
}

#[derive(Debug, Default)]
pub struct SearchBar {
    input: String,
    active: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the input, starting from the term currently applied
    pub fn open(&mut self, current: &str) {
        self.input = current.to_string();
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            KeyCode::Enter => {
                self.active = false;
                SearchAction::Submit(self.input.trim().to_string())
            }
            KeyCode::Esc => {
                self.active = false;
                SearchAction::Cancel
            }
            KeyCode::Backspace => {
                self.input.pop();
                SearchAction::Editing
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                SearchAction::Editing
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                SearchAction::Editing
            }
            _ => SearchAction::Editing,
        }
    }

    /// One-line search row: the live input while editing, otherwise the
    /// applied term or a hint
    pub fn render(&self, f: &mut Frame, area: Rect, applied: &str, theme: &Theme) {
        let label = Span::styled(" Search: ", Style::default().fg(theme.muted));
        let line = if self.active {
            Line::from(vec![
                label,
                Span::styled(self.input.clone(), Style::default().fg(theme.highlight)),
            ])
        } else if applied.is_empty() {
            Line::from(vec![
                label,
                Span::styled("press / to search", Style::default().fg(theme.muted)),
            ])
        } else {
            Line::from(vec![
                label,
                Span::styled(applied.to_string(), Style::default().fg(theme.foreground)),
            ])
        };
        f.render_widget(Paragraph::new(line), area);

        if self.active {
            let x = area.x + " Search: ".len() as u16 + self.input.width() as u16;
            f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}
