//! Centralized theme and styling for the prompts.

use ratatui::style::{Color, Modifier, Style};

/// Default accent: the blue used for markers, matched substrings and the
/// active confirm button.
const ACCENT: Color = Color::Rgb(0x21, 0x96, 0xf3);

/// Prompt theme with consistent colors across all widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for markers, matches and active buttons.
    pub accent: Color,
    /// Primary text color.
    pub fg: Color,
    /// Secondary text (help actions, inactive rows, "No matches").
    pub muted: Color,
    /// Help key labels, slightly brighter than the surrounding help text.
    pub help_key: Color,
    /// Text color on the active button.
    pub button_fg: Color,
    /// Error messages.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            fg: Color::Reset,
            muted: Color::DarkGray,
            help_key: Color::Gray,
            button_fg: Color::White,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Style for prompt titles.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the cursor-row marker and the spinner glyph.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the matched substring inside an entry display.
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for placeholder text in an empty input field.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    /// Style for the fake cursor cell inside a text field.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for an inactive confirm button.
    #[must_use]
    pub fn button_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for the active confirm button.
    #[must_use]
    pub fn button_active_style(&self) -> Style {
        Style::default()
            .fg(self.button_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for help key labels.
    #[must_use]
    pub fn help_key_style(&self) -> Style {
        Style::default().fg(self.help_key)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
