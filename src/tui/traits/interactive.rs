//! Keyboard handling for focusable panels

use crossterm::event::KeyEvent;

/// Whether a panel consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl Handled {
    pub fn consumed(self) -> bool {
        self == Handled::Yes
    }
}

/// A panel that takes keys while focused
///
/// Keys reach a panel only after the modal, the search input, and the
/// global bindings have passed on them.
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
