//! Clipboard access for `y` (article links, diagnostics lines)
//!
//! `arboard` is opened per copy so no handle is held between key presses.

use super::components::toast::{Toast, ToastKind};
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
/// Fails without a display server (headless Linux) or on permission errors.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text.to_owned())
        .context("Failed to set clipboard text")
}

/// Copy `text`; the toast reports the outcome
pub fn copy_with_feedback(text: &str, what: &str) -> Toast {
    match copy_to_clipboard(text) {
        Ok(()) => Toast::new(ToastKind::Done, format!("Copied {what}")),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            Toast::new(ToastKind::Failed, format!("Could not copy {what}"))
        }
    }
}
