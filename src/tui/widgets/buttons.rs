//! Affirmative/negative button pair for the confirm prompt.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::Theme;

/// Widget rendering the two confirm buttons side by side, with the
/// active one filled in the accent color.
pub struct ButtonRow<'a> {
    affirmative: &'a str,
    negative: &'a str,
    /// True when the affirmative button is the active one.
    affirmative_active: bool,
    theme: &'a Theme,
}

impl<'a> ButtonRow<'a> {
    #[must_use]
    pub const fn new(
        affirmative: &'a str,
        negative: &'a str,
        affirmative_active: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            affirmative,
            negative,
            affirmative_active,
            theme,
        }
    }

    fn button(&self, text: &'a str, active: bool) -> Span<'a> {
        let style = if active {
            self.theme.button_active_style()
        } else {
            self.theme.button_style()
        };
        Span::styled(format!(" {text} "), style)
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::raw("  "),
            self.button(self.affirmative, self.affirmative_active),
            Span::raw("    "),
            self.button(self.negative, !self.affirmative_active),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(affirmative_active: bool) -> Result<Terminal<TestBackend>> {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend)?;
        let theme = Theme::default();
        terminal.draw(|frame| {
            let row = ButtonRow::new("Yes", "No", affirmative_active, &theme);
            frame.render_widget(row, Rect::new(0, 0, 30, 1));
        })?;
        Ok(terminal)
    }

    fn row_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..30)
            .map(|x| buffer.cell((x, 0)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    /// Tests both labels render with padding.
    #[test]
    fn renders_both_labels() -> Result<()> {
        let terminal = draw(true)?;
        let row = row_text(&terminal);
        assert!(row.contains(" Yes "));
        assert!(row.contains(" No "));
        Ok(())
    }

    /// Tests the active button carries the accent background.
    #[test]
    fn active_button_is_filled() -> Result<()> {
        let theme = Theme::default();
        let terminal = draw(true)?;
        let buffer = terminal.backend().buffer();
        // "  " margin then " Yes ": column 3 sits on the "Y".
        let yes_bg = buffer.cell((3, 0)).map(|cell| cell.style().bg);
        assert_eq!(yes_bg, Some(Some(theme.accent)));
        Ok(())
    }

    /// Tests toggling moves the fill to the negative button.
    #[test]
    fn toggling_moves_fill() -> Result<()> {
        let theme = Theme::default();
        let terminal = draw(false)?;
        let buffer = terminal.backend().buffer();
        let yes_bg = buffer.cell((3, 0)).and_then(|cell| cell.style().bg);
        assert_eq!(yes_bg, None);
        let row = row_text(&terminal);
        let no_col = u16::try_from(row.find(" No ").unwrap_or(0)).unwrap_or(0) + 1;
        let no_bg = buffer.cell((no_col, 0)).map(|cell| cell.style().bg);
        assert_eq!(no_bg, Some(Some(theme.accent)));
        Ok(())
    }
}
