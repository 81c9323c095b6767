//! Key/action help line shown under a prompt.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::Theme;

/// Widget rendering `key action` pairs separated by bullets, e.g.
/// `↑/↓ switch  •  enter confirm  •  esc abort`.
pub struct HelpBar<'a> {
    keys: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(keys: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self { keys, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  \u{2022}  ", self.theme.muted_style()));
            }
            spans.push(Span::styled(*key, self.theme.help_key_style()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, self.theme.muted_style()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(keys: &[(&str, &str)]) -> Result<String> {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend)?;
        let theme = Theme::default();
        terminal.draw(|frame| {
            frame.render_widget(HelpBar::new(keys, &theme), Rect::new(0, 0, 50, 1));
        })?;
        let buffer = terminal.backend().buffer();
        Ok((0..50)
            .map(|x| buffer.cell((x, 0)).map_or(" ", |cell| cell.symbol()))
            .collect())
    }

    /// Tests keys and actions render in order.
    #[test]
    fn renders_keys_and_actions() -> Result<()> {
        let row = draw(&[("enter", "confirm"), ("esc", "abort")])?;
        assert!(row.contains("enter confirm"));
        assert!(row.contains("esc abort"));
        Ok(())
    }

    /// Tests entries are separated by bullets.
    #[test]
    fn separates_entries_with_bullets() -> Result<()> {
        let row = draw(&[("a", "one"), ("b", "two"), ("c", "three")])?;
        assert_eq!(row.matches('\u{2022}').count(), 2);
        Ok(())
    }

    /// Tests a single binding renders without a separator.
    #[test]
    fn single_entry_has_no_bullet() -> Result<()> {
        let row = draw(&[("esc", "abort")])?;
        assert_eq!(row.matches('\u{2022}').count(), 0);
        Ok(())
    }
}
