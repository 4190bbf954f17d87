//! Width breakpoints
//!
//! The card grid drives every width decision: a breakpoint is how many
//! cards of at least `MIN_CARD_WIDTH` fit side by side, capped at four.
//! Title and status bars key their compact forms off the same value.

/// Narrowest card that still shows a readable title and link
pub const MIN_CARD_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// One card per row (< 68 cols)
    Compact = 1,
    /// Two cards (68-101 cols)
    Normal = 2,
    /// Three cards (102-135 cols)
    Wide = 3,
    /// Four cards (136+ cols)
    UltraWide = 4,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width / MIN_CARD_WIDTH {
            0 | 1 => Breakpoint::Compact,
            2 => Breakpoint::Normal,
            3 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Cards per grid row
    pub fn grid_columns(&self) -> usize {
        *self as usize
    }
}
