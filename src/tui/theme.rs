// Theme system for the TUI
//
// Two built-in palettes, selected by the `theme` config key. Every component
// reads colors from here; nothing hardcodes a color.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse from config; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Card Content ────────────────────────────────────────
    pub headline: Color,
    pub link: Color,
    pub byline: Color,

    // ─── Signals ─────────────────────────────────────────────
    pub progress: Color,
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
}

impl Theme {
    pub fn by_name(name: &str) -> Self {
        ThemeKind::from_name(name).theme()
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(127, 132, 142),
            title: Color::Rgb(97, 175, 239),
            border: Color::Rgb(92, 99, 112),
            highlight: Color::Rgb(229, 192, 123),
            status_bar: Color::Rgb(171, 178, 191),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(62, 68, 81),
            selection_fg: Color::Rgb(255, 255, 255),
            headline: Color::Rgb(255, 255, 255),
            link: Color::Rgb(86, 182, 194),
            byline: Color::Rgb(198, 120, 221),
            progress: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            warn: Color::Rgb(229, 192, 123),
            info: Color::Rgb(97, 175, 239),
            debug: Color::Rgb(127, 132, 142),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            muted: Color::Rgb(160, 161, 167),
            title: Color::Rgb(64, 120, 242),
            border: Color::Rgb(160, 161, 167),
            highlight: Color::Rgb(193, 132, 1),
            status_bar: Color::Rgb(80, 82, 90),
            border_type: BorderType::Plain,
            selection: Color::Rgb(229, 229, 230),
            selection_fg: Color::Rgb(18, 20, 26),
            headline: Color::Rgb(18, 20, 26),
            link: Color::Rgb(1, 132, 188),
            byline: Color::Rgb(166, 38, 164),
            progress: Color::Rgb(80, 161, 79),
            error: Color::Rgb(228, 86, 73),
            warn: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
            debug: Color::Rgb(160, 161, 167),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
