//! Free-text input prompt.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::error::PromptError;
use crate::line::LineEdit;
use crate::prompts::runner::{self, PromptModel, Signal};
use crate::tui::Theme;
use crate::tui::widgets::{HelpBar, TextField};

/// Key bindings shown when the help bar is enabled.
const HELP_KEYS: &[(&str, &str)] = &[("esc", "abort")];

/// One-line free-text capture: type, edit with the usual movement keys,
/// enter submits the value (which may be empty).
///
/// ```no_run
/// use promptkit::Input;
///
/// let name = Input::new()
///     .title("Project name")
///     .placeholder("my-project")
///     .run()?;
/// # Ok::<(), promptkit::PromptError>(())
/// ```
#[derive(Default)]
pub struct Input {
    title: String,
    placeholder: String,
    show_help: bool,
    theme: Theme,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            placeholder: String::new(),
            show_help: false,
            theme: Theme::default(),
        }
    }

    /// Title rendered above the field.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Dimmed text shown while the field is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Shows the key help line under the field.
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

    /// Runs the interaction and returns the typed value.
    ///
    /// # Errors
    ///
    /// [`PromptError::Aborted`] on Esc/Ctrl-C and [`PromptError::Io`] for
    /// terminal failures.
    pub fn run(self) -> Result<String, PromptError> {
        let theme = self.theme.clone();
        let model = InputModel {
            title: self.title,
            line: LineEdit::new(),
            placeholder: self.placeholder,
            show_help: self.show_help,
        };
        runner::run(model, &theme)
    }
}

struct InputModel {
    title: String,
    line: LineEdit,
    placeholder: String,
    show_help: bool,
}

impl PromptModel for InputModel {
    type Output = String;

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Signal> {
        if runner::is_abort_key(key) {
            return Some(Signal::Abort);
        }
        if key.code == KeyCode::Enter {
            return Some(Signal::Submit);
        }
        self.line.handle_key(key);
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
            let mut field = TextField::new(&self.line, theme).marker("> ");
            if !self.placeholder.is_empty() {
                field = field.placeholder(&self.placeholder);
            }
            frame.render_widget(field, row);
        }
        if self.show_help
            && let Some(row) = row_at(area, y.saturating_add(2))
        {
            frame.render_widget(HelpBar::new(HELP_KEYS, theme), row);
        }
    }

    fn into_output(self) -> Result<String, PromptError> {
        Ok(self.line.into_value())
    }
}

/// One-row rect at `y`, or `None` when it falls outside the area.
fn row_at(area: Rect, y: u16) -> Option<Rect> {
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}
