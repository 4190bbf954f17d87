//! Vertical scrollbar drawn over a panel's right border

use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Draw the scrollbar for `scroll`. `arrows` adds ↑/↓ end caps.
/// Nothing is drawn when everything fits.
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, theme: &Theme, arrows: bool) {
    if !scroll.overflows() {
        return;
    }

    let (begin, end) = if arrows {
        (Some("↑"), Some("↓"))
    } else {
        (None, None)
    };
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(begin)
        .end_symbol(end)
        .thumb_style(Style::default().fg(theme.highlight))
        .track_style(Style::default().fg(theme.border));

    // Position range is the scrollable distance, not the content length
    let range = scroll.total() - scroll.viewport();
    let mut state = ScrollbarState::new(range).position(scroll.offset());

    f.render_stateful_widget(scrollbar, area, &mut state);
}
