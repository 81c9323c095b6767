//! Filterable selection list backing the select prompt.
//!
//! Keeps an immutable backing list of entries and a derived,
//! order-preserving filtered view driven by a live text query. Matching is
//! plain case-insensitive substring containment, not fuzzy matching, and
//! entries are never reordered by relevance.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One selectable item.
///
/// `display` is what the user sees and what the query is matched against;
/// `payload` is the opaque value handed back when the entry is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Text shown in the list and matched against the query.
    pub display: String,
    /// Value returned to the caller on confirmation.
    pub payload: String,
}

impl Entry {
    /// Creates an entry from a display text and a payload.
    #[must_use]
    pub fn new(display: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            payload: payload.into(),
        }
    }
}

impl From<&str> for Entry {
    /// Builds an entry whose payload equals its display text.
    fn from(display: &str) -> Self {
        Self::new(display, display)
    }
}

impl From<String> for Entry {
    fn from(display: String) -> Self {
        let payload = display.clone();
        Self { display, payload }
    }
}

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
}

/// The backing list plus the filtered view and cursor derived from the
/// current query.
///
/// Invariant: the cursor is `None` exactly when the filtered view is
/// empty, and otherwise indexes a row of the view.
#[derive(Debug, Clone)]
pub struct FilterList {
    entries: Vec<Entry>,
    /// Original indices of the entries matching the current query, in
    /// backing-list order.
    filtered: Vec<usize>,
    cursor: Option<usize>,
    query: String,
}

impl FilterList {
    /// Creates a list over the given entries with an empty query, so the
    /// view initially shows everything. An empty backing list is legal and
    /// yields a permanently empty view.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let filtered: Vec<usize> = (0..entries.len()).collect();
        let cursor = if filtered.is_empty() { None } else { Some(0) };
        Self {
            entries,
            filtered,
            cursor,
            query: String::new(),
        }
    }

    /// Recomputes the filtered view for `query` and clamps the cursor.
    ///
    /// An empty query matches every entry. The cursor keeps its position
    /// when it is still inside the new view and clamps to the last row
    /// otherwise, so narrowing the query does not jump the selection back
    /// to the top. Returns the new resolved selection.
    pub fn set_query(&mut self, query: &str) -> Option<usize> {
        if self.query != query {
            self.query.clear();
            self.query.push_str(query);
        }
        self.filtered.clear();
        for (index, entry) in self.entries.iter().enumerate() {
            if query.is_empty() || highlight_span(&entry.display, query).is_some() {
                self.filtered.push(index);
            }
        }
        log::trace!(
            "query {:?} matched {} of {} entries",
            query,
            self.filtered.len(),
            self.entries.len()
        );
        self.cursor = match self.filtered.len() {
            0 => None,
            len => Some(self.cursor.unwrap_or(0).min(len - 1)),
        };
        self.resolved()
    }

    /// Moves the cursor one row, saturating at the view bounds. A no-op
    /// when the view is empty. Returns the new resolved selection.
    pub fn move_cursor(&mut self, direction: CursorMove) -> Option<usize> {
        if let Some(cursor) = self.cursor {
            let last = self.filtered.len().saturating_sub(1);
            self.cursor = Some(match direction {
                CursorMove::Up => cursor.saturating_sub(1),
                CursorMove::Down => (cursor + 1).min(last),
            });
        }
        self.resolved()
    }

    /// Original index of the entry under the cursor, or `None` when the
    /// view is empty.
    #[must_use]
    pub fn resolved(&self) -> Option<usize> {
        self.cursor.and_then(|c| self.filtered.get(c).copied())
    }

    /// The entry under the cursor, or `None` when the view is empty.
    #[must_use]
    pub fn resolved_entry(&self) -> Option<&Entry> {
        self.resolved().and_then(|i| self.entries.get(i))
    }

    /// Cursor position within the filtered view.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The query the current view was computed from.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of rows in the filtered view.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.filtered.len()
    }

    /// True when no entry matches the current query.
    #[must_use]
    pub fn is_view_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Number of entries in the backing list.
    #[must_use]
    pub fn backing_len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates the filtered view as `(original index, entry)` pairs in
    /// backing-list order.
    pub fn view(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.filtered
            .iter()
            .filter_map(|&i| self.entries.get(i).map(|entry| (i, entry)))
    }
}

/// Returns the byte range of the first case-insensitive occurrence of
/// `query` within `display`, or `None` when the query is empty or absent.
///
/// The range indexes into `display` and both ends fall on char
/// boundaries, so renderers can slice the original string directly. The
/// filter predicate and this function agree: a non-empty query keeps an
/// entry exactly when a span exists for it.
#[must_use]
pub fn highlight_span(display: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    for (start, _) in display.char_indices() {
        if let Some(end) = match_at(display, start, &needle) {
            return Some(start..end);
        }
    }
    None
}

/// Matches `needle` (already lowercased) against the lowercase expansion
/// of `display[start..]`. A match must consume whole characters of
/// `display`; returns the exclusive end byte offset when it does.
fn match_at(display: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in display.get(start..)?.char_indices() {
        for lower in ch.to_lowercase() {
            if matched == needle.len() {
                // Needle ran out in the middle of this character's
                // lowercase expansion: not a whole-character match.
                return None;
            }
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}
