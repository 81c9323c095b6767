//! Yes/no confirmation prompt.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::error::PromptError;
use crate::prompts::runner::{self, PromptModel, Signal};
use crate::tui::Theme;
use crate::tui::widgets::{ButtonRow, HelpBar};

/// Key bindings shown when the help bar is enabled.
const HELP_KEYS: &[(&str, &str)] = &[
    ("\u{2190}/\u{2192}", "toggle"),
    ("enter", "confirm"),
    ("esc", "abort"),
];

/// Two-button confirmation: arrows or h/l toggle, y/n answer directly,
/// enter submits the highlighted button.
///
/// ```no_run
/// use promptkit::Confirm;
///
/// let proceed = Confirm::new("Overwrite the file?").run()?;
/// # Ok::<(), promptkit::PromptError>(())
/// ```
pub struct Confirm {
    title: String,
    affirmative: String,
    negative: String,
    show_help: bool,
    theme: Theme,
}

impl Confirm {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            affirmative: "Yes".to_string(),
            negative: "No".to_string(),
            show_help: false,
            theme: Theme::default(),
        }
    }

    /// Label for the affirmative button (default "Yes").
    #[must_use]
    pub fn affirmative(mut self, label: impl Into<String>) -> Self {
        self.affirmative = label.into();
        self
    }

    /// Label for the negative button (default "No").
    #[must_use]
    pub fn negative(mut self, label: impl Into<String>) -> Self {
        self.negative = label.into();
        self
    }

    /// Shows the key help line under the buttons.
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

    /// Runs the interaction; true means the affirmative button was chosen.
    ///
    /// # Errors
    ///
    /// [`PromptError::Aborted`] on Esc/Ctrl-C and [`PromptError::Io`] for
    /// terminal failures.
    pub fn run(self) -> Result<bool, PromptError> {
        let theme = self.theme.clone();
        let model = ConfirmModel {
            title: self.title,
            affirmative: self.affirmative,
            negative: self.negative,
            state: true,
            show_help: self.show_help,
        };
        runner::run(model, &theme)
    }
}

struct ConfirmModel {
    title: String,
    affirmative: String,
    negative: String,
    /// True while the affirmative button is highlighted.
    state: bool,
    show_help: bool,
}

impl PromptModel for ConfirmModel {
    type Output = bool;

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Signal> {
        if runner::is_abort_key(key) {
            return Some(Signal::Abort);
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state = true,
            KeyCode::Right | KeyCode::Char('l') => self.state = false,
            KeyCode::Char('y') => {
                self.state = true;
                return Some(Signal::Submit);
            }
            KeyCode::Char('n') => {
                self.state = false;
                return Some(Signal::Submit);
            }
            KeyCode::Enter => return Some(Signal::Submit),
            _ => {}
        }
        None
    }

    fn view_height(&self) -> u16 {
        let title = if self.title.is_empty() { 0 } else { 2 };
        let help = if self.show_help { 2 } else { 0 };
        title + 1 + help
    }

    fn render(&self, frame: &mut Frame<'_>, theme: &Theme) {
        let area = frame.area();
        let mut y = area.y;
        if !self.title.is_empty() {
            if let Some(row) = row_at(area, y) {
                frame.render_widget(
                    Paragraph::new(self.title.as_str()).style(theme.title_style()),
                    row,
                );
            }
            y = y.saturating_add(2);
        }
        if let Some(row) = row_at(area, y) {
            frame.render_widget(
                ButtonRow::new(&self.affirmative, &self.negative, self.state, theme),
                row,
            );
        }
        if self.show_help
            && let Some(row) = row_at(area, y.saturating_add(2))
        {
            frame.render_widget(HelpBar::new(HELP_KEYS, theme), row);
        }
    }

    fn into_output(self) -> Result<bool, PromptError> {
        Ok(self.state)
    }
}

/// One-row rect at `y`, or `None` when it falls outside the area.
fn row_at(area: Rect, y: u16) -> Option<Rect> {
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn model() -> ConfirmModel {
        ConfirmModel {
            title: "Proceed?".to_string(),
            affirmative: "Yes".to_string(),
            negative: "No".to_string(),
            state: true,
            show_help: false,
        }
    }

    // =========================================================================
    // Key Handling Tests
    // =========================================================================

    mod key_handling {
        use super::*;

        /// Tests left/right toggle the highlighted button.
        #[test]
        fn arrows_toggle_state() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Right)), None);
            assert!(!model.state);
            assert_eq!(model.handle_key(&key(KeyCode::Left)), None);
            assert!(model.state);
        }

        /// Tests the vim-style h/l keys mirror the arrows.
        #[test]
        fn h_and_l_toggle_state() {
            let mut model = model();
            model.handle_key(&key(KeyCode::Char('l')));
            assert!(!model.state);
            model.handle_key(&key(KeyCode::Char('h')));
            assert!(model.state);
        }

        /// Tests 'y' answers affirmatively in one stroke.
        #[test]
        fn y_submits_affirmative() {
            let mut model = model();
            model.state = false;
            assert_eq!(
                model.handle_key(&key(KeyCode::Char('y'))),
                Some(Signal::Submit)
            );
            assert!(model.state);
        }

        /// Tests 'n' answers negatively in one stroke.
        #[test]
        fn n_submits_negative() {
            let mut model = model();
            assert_eq!(
                model.handle_key(&key(KeyCode::Char('n'))),
                Some(Signal::Submit)
            );
            assert!(!model.state);
        }

        /// Tests enter submits whatever is highlighted.
        #[test]
        fn enter_submits_current_state() {
            let mut model = model();
            model.handle_key(&key(KeyCode::Right));
            assert_eq!(model.handle_key(&key(KeyCode::Enter)), Some(Signal::Submit));
            assert!(!model.state);
        }

        /// Tests esc signals an abort.
        #[test]
        fn esc_aborts() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Esc)), Some(Signal::Abort));
        }

        /// Tests unrelated keys leave the state alone.
        #[test]
        fn other_keys_are_ignored() {
            let mut model = model();
            assert_eq!(model.handle_key(&key(KeyCode::Char('x'))), None);
            assert!(model.state);
        }
    }

    // =========================================================================
    // Output and Layout Tests
    // =========================================================================

    mod output_and_layout {
        use super::*;

        /// Tests the output mirrors the final state.
        #[test]
        fn output_mirrors_state() {
            let mut affirmative = model();
            affirmative.state = true;
            assert_eq!(affirmative.into_output().ok(), Some(true));

            let mut negative = model();
            negative.state = false;
            assert_eq!(negative.into_output().ok(), Some(false));
        }

        /// Tests the viewport height with and without trimmings.
        #[test]
        fn height_accounts_for_title_and_help() {
            let mut m = model();
            assert_eq!(m.view_height(), 3);
            m.show_help = true;
            assert_eq!(m.view_height(), 5);
            m.title.clear();
            assert_eq!(m.view_height(), 3);
        }
    }
}
