//! Scroll and selection capabilities

use crate::tui::scroll::ScrollState;

/// Panels that own a `ScrollState`
pub trait Scrollable {
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    /// One unit (a card row or a log line); negative is up
    fn scroll_lines(&mut self, delta: isize) {
        self.scroll_state_mut().scroll_by(delta);
    }

    fn scroll_pages(&mut self, pages: isize) {
        self.scroll_state_mut().page_by(pages);
    }
}

/// Panels with a cursor over a list of items
///
/// Implementors decide what `select` does to the viewport; the feed grid
/// maps an article index to its card row first.
pub trait Selectable {
    fn selected_index(&self) -> Option<usize>;

    fn select(&mut self, index: usize);

    fn item_count(&self) -> usize;

    /// Where the cursor lands when nothing is selected yet
    fn entry_point(&self) -> usize {
        0
    }

    /// Move the cursor, clamped to the items; the first move only places it
    fn move_selection(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let next = match self.selected_index() {
            None => self.entry_point(),
            Some(current) => current.saturating_add_signed(delta).min(count - 1),
        };
        self.select(next);
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    fn select_last(&mut self) {
        if let Some(last) = self.item_count().checked_sub(1) {
            self.select(last);
        }
    }
}
