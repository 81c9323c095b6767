//! Single-line text editor state.
//!
//! Shared by the input prompt and the select prompt's query field. Holds
//! the edited value and a byte-offset insertion point that always sits on
//! a char boundary.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable line of text with an insertion cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEdit {
    value: String,
    /// Byte offset of the insertion point into `value`.
    cursor: usize,
}

impl LineEdit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Byte offset of the insertion point.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The text before the insertion point.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        self.value.get(..self.cursor).unwrap_or_default()
    }

    /// The text from the insertion point to the end.
    #[must_use]
    pub fn after_cursor(&self) -> &str {
        self.value.get(self.cursor..).unwrap_or_default()
    }

    /// True when nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Consumes the editor and returns the final value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Inserts a character at the cursor and advances past it.
    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Removes the character before the cursor. Returns false at the start
    /// of the line.
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(start) => {
                self.value.remove(start);
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Removes the character under the cursor. Returns false at the end of
    /// the line.
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Moves the cursor one character left, stopping at the start.
    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    /// Moves the cursor one character right, stopping at the end.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.after_cursor().chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Moves the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor past the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Applies one key press to the editor. Returns true when the key was
    /// an editing or movement key, whether or not it changed anything.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }

    /// Byte offset of the char immediately before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.before_cursor().char_indices().next_back().map(|(i, _)| i)
    }
}
