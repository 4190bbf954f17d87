//! Transient notice above the status bar
//!
//! Copy results land here. A toast expires on its own; the draw pass drops
//! it once `expired` reports true.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_TTL: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Done,
    Failed,
    Notice,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Done => "✓",
            ToastKind::Failed => "✗",
            ToastKind::Notice => "·",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_TTL
    }

    /// Full text as displayed
    pub fn text(&self) -> String {
        format!("{} {}", self.kind.icon(), self.message)
    }

    /// Right-aligned box sitting just above the status bar
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = self.text();
        let width = (text.width() as u16 + 4).min(area.width);
        let height = 3u16;
        let x = area.right().saturating_sub(width + 1);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let accent = match self.kind {
            ToastKind::Done => theme.highlight,
            ToastKind::Failed => theme.error,
            ToastKind::Notice => theme.muted,
        };

        let body = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(Clear, toast_area);
        f.render_widget(body, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_carries_outcome_icon() {
        let toast = Toast::new(ToastKind::Done, "Copied link");
        assert!(!toast.expired());
        assert_eq!(toast.text(), "✓ Copied link");
        assert_eq!(Toast::new(ToastKind::Failed, "x").text(), "✗ x");
    }
}
