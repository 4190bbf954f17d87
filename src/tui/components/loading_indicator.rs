// Loading indicators
//
// Two views of the same fact: a spinner line under the grid while the active
// feed is loading, and a thin progress bar in the header while any fetch
// attempt is outstanding. Neither holds state; the animation frame comes from
// the App tick.

use crate::feed::ProgressTracker;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
    Frame,
};

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Trickle steps for the progress bar (it never reaches 100% on its own)
const TRICKLE_STEPS: usize = 12;

pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Bar fill for the current frame while work is outstanding
pub fn progress_ratio(frame: usize) -> f64 {
    let step = frame % TRICKLE_STEPS + 1;
    // Eases toward 0.9 like a browser page-load bar
    0.9 * (1.0 - 0.75_f64.powi(step as i32))
}

/// "⠋ Loading…" line; renders nothing when not loading
pub fn render_spinner(f: &mut Frame, area: Rect, loading: bool, frame: usize, theme: &Theme) {
    if !loading || area.height == 0 {
        return;
    }
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner_char(frame)),
            Style::default().fg(theme.progress),
        ),
        Span::styled("Loading…", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(line).centered(), area);
}

/// Header progress bar, visible only while fetches are outstanding
pub fn render_progress(
    f: &mut Frame,
    area: Rect,
    progress: &ProgressTracker,
    frame: usize,
    theme: &Theme,
) {
    if !progress.is_active() || area.width == 0 {
        return;
    }
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(theme.progress))
        .unfilled_style(Style::default().fg(theme.border))
        .line_set(symbols::line::THICK)
        .label(Span::styled(
            format!("{} ", progress.outstanding()),
            Style::default().fg(theme.muted),
        ))
        .ratio(progress_ratio(frame));
    f.render_widget(gauge, area);
}
