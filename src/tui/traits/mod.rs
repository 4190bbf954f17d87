//! Capability traits shared by the feed grid and the diagnostics panel

mod interactive;
mod scrollable;

pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
