// Scroll state for TUI panels
//
// The feed grid scrolls in card rows and never follows: a page appended
// below must leave the view where it is. The diagnostics panel scrolls in
// log lines and tails new entries until the user moves away from the end.

use crate::feed::ScrollPosition;
use std::ops::Range;

/// How a panel reacts when content grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Follow {
    /// Stay pinned to the end while the view is at the end
    Tail,
    /// Keep the offset; growth happens out of sight
    Manual,
}

#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: usize,
    total: usize,
    viewport: usize,
    follow: Follow,
    /// Tail panels only: currently glued to the end
    pinned: bool,
}

impl ScrollState {
    pub fn tail() -> Self {
        Self::with_follow(Follow::Tail)
    }

    pub fn manual() -> Self {
        Self::with_follow(Follow::Manual)
    }

    fn with_follow(follow: Follow) -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            follow,
            pinned: follow == Follow::Tail,
        }
    }

    /// New content and viewport sizes (every frame)
    pub fn resize(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = if self.pinned {
            self.last_offset()
        } else {
            self.offset.min(self.last_offset())
        };
    }

    /// Move by `delta` units; negative scrolls up
    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(self.last_offset());
        self.repin();
    }

    /// Move by whole viewports
    pub fn page_by(&mut self, pages: isize) {
        let page = self.viewport.max(1) as isize;
        self.scroll_by(pages.saturating_mul(page));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
        self.repin();
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.last_offset();
        self.repin();
    }

    /// Smallest move that brings unit `index` on screen
    pub fn reveal(&mut self, index: usize) {
        let viewport = self.viewport.max(1);
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + viewport {
            self.offset = (index + 1 - viewport).min(self.last_offset());
        }
        self.repin();
    }

    /// Glue a tail panel back to the end
    pub fn pin(&mut self) {
        if self.follow == Follow::Tail {
            self.pinned = true;
            self.offset = self.last_offset();
        }
    }

    /// Fresh content: back to the top, or the end for tail panels
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total = 0;
        self.pinned = self.follow == Follow::Tail;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Units currently on screen
    pub fn window(&self) -> Range<usize> {
        let end = (self.offset + self.viewport).min(self.total);
        self.offset.min(end)..end
    }

    pub fn overflows(&self) -> bool {
        self.total > self.viewport
    }

    /// Geometry in the form the near-bottom rule takes
    pub fn position(&self) -> ScrollPosition {
        ScrollPosition {
            offset: self.offset,
            viewport: self.viewport,
            total: self.total,
        }
    }

    fn last_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn repin(&mut self) {
        self.pinned = self.follow == Follow::Tail && self.offset >= self.last_offset();
    }
}

/// Panels that can be focused for input routing
///
/// Modals take all input while open and are not part of the focus cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Card grid (default focus)
    #[default]
    Feed,
    /// Diagnostics log panel (only when shown)
    Logs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_tracks_growth_until_scrolled_away() {
        let mut scroll = ScrollState::tail();
        scroll.resize(10, 5);
        assert_eq!(scroll.offset(), 5);
        scroll.resize(15, 5);
        assert_eq!(scroll.offset(), 10);

        scroll.scroll_by(-1);
        assert!(!scroll.is_pinned());
        scroll.resize(20, 5);
        assert_eq!(scroll.offset(), 9);

        scroll.to_bottom();
        assert!(scroll.is_pinned());
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn manual_keeps_offset_when_content_grows() {
        let mut scroll = ScrollState::manual();
        scroll.resize(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.to_bottom();
        assert_eq!(scroll.offset(), 5);
        assert!(!scroll.is_pinned());

        scroll.resize(15, 5);
        assert_eq!(scroll.offset(), 5);
        assert_eq!(scroll.position().total, 15);
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let mut scroll = ScrollState::manual();
        scroll.resize(8, 3);
        scroll.page_by(10);
        assert_eq!(scroll.offset(), 5);
        scroll.scroll_by(-100);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.window(), 0..3);
    }

    #[test]
    fn reveal_moves_minimally() {
        let mut scroll = ScrollState::manual();
        scroll.resize(10, 3);

        scroll.reveal(1);
        assert_eq!(scroll.offset(), 0);
        scroll.reveal(4);
        assert_eq!(scroll.offset(), 2);
        scroll.reveal(0);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn pin_only_applies_to_tail_panels() {
        let mut grid = ScrollState::manual();
        grid.resize(10, 3);
        grid.pin();
        assert_eq!(grid.offset(), 0);

        let mut logs = ScrollState::tail();
        logs.resize(10, 3);
        logs.to_top();
        logs.pin();
        assert!(logs.is_pinned());
        assert_eq!(logs.offset(), 7);
    }

    #[test]
    fn reset_returns_to_top() {
        let mut scroll = ScrollState::manual();
        scroll.resize(10, 3);
        scroll.page_by(1);
        scroll.reset();
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.total(), 0);
        assert!(scroll.window().is_empty());
    }
}
