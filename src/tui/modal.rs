// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// Copy the article link
    CopyLink,
    /// Show the neighbouring article (-1 / +1)
    Step(isize),
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Full text of one article, by index into the mounted feed
    Article(usize),
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn article(index: usize) -> Self {
        Modal::Article(index)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Article(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyLink,
                KeyCode::Left | KeyCode::Char('h') => ModalAction::Step(-1),
                KeyCode::Right | KeyCode::Char('l') => ModalAction::Step(1),
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_its_own_key() {
        assert_eq!(Modal::help().handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::help().handle_input(KeyCode::Char('y')), ModalAction::None);
    }

    #[test]
    fn article_modal_keys() {
        let modal = Modal::article(2);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::CopyLink);
        assert_eq!(modal.handle_input(KeyCode::Right), ModalAction::Step(1));
    }
}
