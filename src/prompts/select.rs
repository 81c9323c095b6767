//! Single-select prompt with a live substring filter.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};

use crate::error::PromptError;
use crate::filter::{CursorMove, Entry, FilterList};
use crate::line::LineEdit;
use crate::prompts::runner::{self, PromptModel, Signal};
use crate::tui::Theme;
use crate::tui::widgets::{HelpBar, MAX_VISIBLE_ROWS, SelectList, TextField};

/// Key bindings shown when the help bar is enabled.
const HELP_KEYS: &[(&str, &str)] = &[
    ("\u{2191}/\u{2193}", "switch"),
    ("enter", "confirm"),
    ("esc", "abort"),
];

/// Single-select interaction: type to filter, arrows to move, enter to
/// confirm.
///
/// ```no_run
/// use promptkit::{Entry, Select};
///
/// let payload = Select::new(vec![Entry::new("First", "1"), Entry::new("Second", "2")])
///     .title("Pick one")
///     .run()?;
/// # Ok::<(), promptkit::PromptError>(())
/// ```
pub struct Select {
    entries: Vec<Entry>,
    title: String,
    show_help: bool,
    theme: Theme,
}

impl Select {
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            title: String::new(),
            show_help: false,
            theme: Theme::default(),
        }
    }

    /// Title rendered before the filter field.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Shows the key help line under the list.
    #[must_use]
    pub const fn show_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Runs the interaction and returns the payload of the chosen entry.
    ///
    /// # Errors
    ///
    /// [`PromptError::NoSelection`] when enter is pressed while no entry
    /// matches the query, [`PromptError::Aborted`] on Esc/Ctrl-C, and
    /// [`PromptError::Io`] for terminal failures.
    pub fn run(self) -> Result<String, PromptError> {
        let theme = self.theme.clone();
        let model = SelectModel::new(self.entries, self.title, self.show_help);
        runner::run(model, &theme)
    }
}

struct SelectModel {
    list: FilterList,
    query: LineEdit,
    title: String,
    show_help: bool,
}

impl SelectModel {
    fn new(entries: Vec<Entry>, title: String, show_help: bool) -> Self {
        Self {
            list: FilterList::new(entries),
            query: LineEdit::new(),
            title,
            show_help,
        }
    }

    fn visible_rows(&self) -> usize {
        self.list.backing_len().clamp(1, MAX_VISIBLE_ROWS)
    }
}

impl PromptModel for SelectModel {
    type Output = String;

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Signal> {
        if runner::is_abort_key(key) {
            return Some(Signal::Abort);
        }
        match key.code {
            KeyCode::Up => {
                self.list.move_cursor(CursorMove::Up);
            }
            KeyCode::Down => {
                self.list.move_cursor(CursorMove::Down);
            }
            KeyCode::Enter => return Some(Signal::Submit),
            _ => {
                if self.query.handle_key(key) {
                    self.list.set_query(self.query.value());
                }
            }
        }
        None
    }

    fn view_height(&self) -> u16 {
        let help = if self.show_help { 2 } else { 0 };
        u16::try_from(1 + self.visible_rows() + help).unwrap_or(u16::MAX)
    }

    fn render(&self, frame: &mut Frame<'_>, theme: &Theme) {
        let help_height = if self.show_help { 2 } else { 0 };
        let [field_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(help_height),
        ])
        .areas(frame.area());

        let mut field = TextField::new(&self.query, theme);
        if !self.title.is_empty() {
            field = field.label(&self.title);
        }
        frame.render_widget(field, field_area);
        frame.render_widget(SelectList::new(&self.list, theme), list_area);
        if self.show_help && help_area.height > 0 {
            let bar = Rect {
                y: help_area.bottom().saturating_sub(1),
                height: 1,
                ..help_area
            };
            frame.render_widget(HelpBar::new(HELP_KEYS, theme), bar);
        }
    }

    fn into_output(self) -> Result<String, PromptError> {
        self.list
            .resolved_entry()
            .map(|entry| entry.payload.clone())
            .ok_or(PromptError::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn model() -> SelectModel {
        SelectModel::new(
            vec![
                Entry::new("Alpha", "a"),
                Entry::new("Beta", "b"),
                Entry::new("Gamma", "g"),
            ],
            String::new(),
            false,
        )
    }

    fn type_text(model: &mut SelectModel, text: &str) {
        for ch in text.chars() {
            model.handle_key(&key(KeyCode::Char(ch)));
        }
    }

    // =========================================================================
    // Key Handling Tests
    // =========================================================================

    mod key_handling {
        use super::*;

        /// Tests typing narrows the view through the query field.
        #[test]
        fn typing_filters_the_view() {
            let mut model = model();
            type_text(&mut model, "bet");
            assert_eq!(model.list.view_len(), 1);
            assert_eq!(model.list.resolved(), Some(1));
        }

        /// Tests backspace widens the view again.
        #[test]
        fn backspace_widens_the_view() {
            let mut model = model();
            type_text(&mut model, "bet");
            model.handle_key(&key(KeyCode::Backspace));
            model.handle_key(&key(KeyCode::Backspace));
            model.handle_key(&key(KeyCode::Backspace));
            assert_eq!(model.list.view_len(), 3);
        }

        /// Tests arrows move the cursor with saturation.
        #[test]
        fn arrows_move_cursor() {
            let mut model = model();
            model.handle_key(&key(KeyCode::Down));
            model.handle_key(&key(KeyCode::Down));
            model.handle_key(&key(KeyCode::Down));
            assert_eq!(model.list.cursor(), Some(2));
            model.handle_key(&key(KeyCode::Up));
            assert_eq!(model.list.cursor(), Some(1));
        }

        /// Tests enter signals submission.
        #[test]
        fn enter_submits() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Enter)), Some(Signal::Submit));
        }

        /// Tests esc and ctrl-c signal an abort.
        #[test]
        fn abort_chords_signal_abort() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Esc)), Some(Signal::Abort));
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(model.handle_key(&ctrl_c), Some(Signal::Abort));
        }

        /// Tests query keys do not end the session.
        #[test]
        fn query_edits_do_not_signal() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Char('a'))), None);
            assert_eq!(model.handle_key(&key(KeyCode::Left)), None);
        }
    }

    // =========================================================================
    // Output Tests
    // =========================================================================

    mod output {
        use super::*;

        /// Tests the confirmed payload follows the cursor.
        #[test]
        fn output_is_cursor_payload() {
            let mut model = model();
            model.handle_key(&key(KeyCode::Down));
            let payload = model.into_output().ok();
            assert_eq!(payload.as_deref(), Some("b"));
        }

        /// Tests filtering then confirming returns the original entry's
        /// payload, not a view-relative one.
        #[test]
        fn output_uses_original_index() {
            let mut model = model();
            type_text(&mut model, "gam");
            let payload = model.into_output().ok();
            assert_eq!(payload.as_deref(), Some("g"));
        }

        /// Tests confirming an empty view is the no-selection error.
        #[test]
        fn empty_view_yields_no_selection() {
            let mut model = model();
            type_text(&mut model, "zzz");
            assert!(matches!(
                model.into_output(),
                Err(PromptError::NoSelection)
            ));
        }
    }

    // =========================================================================
    // Layout Tests
    // =========================================================================

    mod layout {
        use super::*;

        /// Tests the viewport covers the query row plus every entry.
        #[test]
        fn height_covers_entries() {
            let model = model();
            assert_eq!(model.view_height(), 4);
        }

        /// Tests the help bar adds two rows.
        #[test]
        fn help_adds_two_rows() {
            let model = SelectModel::new(vec![Entry::from("one")], String::new(), true);
            assert_eq!(model.view_height(), 4);
        }

        /// Tests tall lists clamp to the visible-row cap.
        #[test]
        fn tall_lists_clamp_to_cap() {
            let entries: Vec<Entry> =
                (0..40).map(|i| Entry::from(format!("row-{i}"))).collect();
            let model = SelectModel::new(entries, String::new(), false);
            assert_eq!(usize::from(model.view_height()), 1 + MAX_VISIBLE_ROWS);
        }

        /// Tests an empty backing list still reserves the no-matches row.
        #[test]
        fn empty_backing_list_reserves_a_row() {
            let model = SelectModel::new(Vec::new(), String::new(), false);
            assert_eq!(model.view_height(), 2);
        }
    }
}
