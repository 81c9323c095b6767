//! Single-line text field with a fake cursor cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::line::LineEdit;
use crate::tui::Theme;

/// Widget rendering a [`LineEdit`] with an optional leading label, a
/// prompt marker, and placeholder text while the line is empty.
///
/// The cursor is drawn as a reversed cell, and the line scrolls
/// horizontally when the text outgrows the available width.
pub struct TextField<'a> {
    line: &'a LineEdit,
    label: Option<&'a str>,
    marker: Option<&'a str>,
    placeholder: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    #[must_use]
    pub const fn new(line: &'a LineEdit, theme: &'a Theme) -> Self {
        Self {
            line,
            label: None,
            marker: None,
            placeholder: None,
            theme,
        }
    }

    /// Bold label rendered before the field (a select prompt's title).
    #[must_use]
    pub const fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Accent marker rendered before the text (an input prompt's `>`).
    #[must_use]
    pub const fn marker(mut self, marker: &'a str) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Dimmed text shown while the line is empty.
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        let mut prefix_width = 0usize;
        if let Some(label) = self.label {
            spans.push(Span::styled(label, self.theme.title_style()));
            spans.push(Span::raw(" "));
            prefix_width += label.width() + 1;
        }
        if let Some(marker) = self.marker {
            spans.push(Span::styled(marker, self.theme.accent_style()));
            prefix_width += marker.width();
        }

        if self.line.is_empty() {
            match self.placeholder.filter(|p| !p.is_empty()) {
                Some(placeholder) => {
                    // Cursor sits on the first placeholder character.
                    let head_len = placeholder
                        .chars()
                        .next()
                        .map_or(0, char::len_utf8);
                    let head = placeholder.get(..head_len).unwrap_or(" ");
                    let tail = placeholder.get(head_len..).unwrap_or_default();
                    spans.push(Span::styled(
                        head,
                        self.theme.placeholder_style().patch(self.theme.cursor_style()),
                    ));
                    spans.push(Span::styled(tail, self.theme.placeholder_style()));
                }
                None => spans.push(Span::styled(" ", self.theme.cursor_style())),
            }
            Paragraph::new(Line::from(spans)).render(area, buf);
            return;
        }

        let before = self.line.before_cursor();
        let after = self.line.after_cursor();
        spans.push(Span::styled(before, self.theme.normal_style()));
        match after.chars().next() {
            Some(ch) => {
                let (under, rest) = after.split_at(ch.len_utf8());
                spans.push(Span::styled(under, self.theme.cursor_style()));
                spans.push(Span::styled(rest, self.theme.normal_style()));
            }
            None => spans.push(Span::styled(" ", self.theme.cursor_style())),
        }

        // Scroll so the cursor cell never leaves the viewport.
        let cursor_col = prefix_width + before.width();
        let avail = usize::from(area.width.saturating_sub(1));
        let scroll = u16::try_from(cursor_col.saturating_sub(avail)).unwrap_or(u16::MAX);

        Paragraph::new(Line::from(spans))
            .scroll((0, scroll))
            .render(area, buf);
    }
}
