//! Filtered entry list with cursor marker and match emphasis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

use crate::filter::{FilterList, highlight_span};
use crate::tui::Theme;

/// Maximum number of visible rows a select prompt shows at once.
pub const MAX_VISIBLE_ROWS: usize = 8;

/// Widget rendering the filtered view of a [`FilterList`].
///
/// The cursor row carries an accent check marker; the substring matched
/// by the current query is emphasized on every row. When more rows match
/// than fit, the window scrolls to keep the cursor visible.
pub struct SelectList<'a> {
    list: &'a FilterList,
    max_rows: usize,
    theme: &'a Theme,
}

impl<'a> SelectList<'a> {
    #[must_use]
    pub const fn new(list: &'a FilterList, theme: &'a Theme) -> Self {
        Self {
            list,
            max_rows: MAX_VISIBLE_ROWS,
            theme,
        }
    }

    #[must_use]
    pub const fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

/// First visible row of the window: sticks to the top until the cursor
/// passes the last visible row, then follows it.
fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 || cursor < rows {
        0
    } else {
        cursor + 1 - rows
    }
}

impl Widget for SelectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.list.is_view_empty() {
            let line = Line::from(" No matches").style(self.theme.muted_style());
            Widget::render(line, area, buf);
            return;
        }

        let rows = usize::from(area.height).min(self.max_rows).max(1);
        let cursor = self.list.cursor().unwrap_or(0);
        let offset = scroll_offset(cursor, rows);
        let query = self.list.query();

        let items: Vec<ListItem> = self
            .list
            .view()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(row, (_, entry))| {
                let marker = if row == cursor {
                    Span::styled(" \u{2713} ", self.theme.accent_style())
                } else {
                    Span::styled(" \u{2022} ", self.theme.normal_style())
                };
                let mut spans = vec![marker];
                match highlight_span(&entry.display, query) {
                    Some(range) => {
                        let before = entry.display.get(..range.start).unwrap_or_default();
                        let matched =
                            entry.display.get(range.start..range.end).unwrap_or_default();
                        let after = entry.display.get(range.end..).unwrap_or_default();
                        spans.push(Span::styled(before, self.theme.normal_style()));
                        spans.push(Span::styled(matched, self.theme.match_style()));
                        spans.push(Span::styled(after, self.theme.normal_style()));
                    }
                    None => {
                        spans.push(Span::styled(
                            entry.display.as_str(),
                            self.theme.normal_style(),
                        ));
                    }
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        Widget::render(List::new(items), area, buf);
    }
}
