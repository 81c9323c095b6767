//! Shared synchronous event loop for interactive prompts.
//!
//! One dispatcher per session: draw the current state, poll for a single
//! decoded key press, hand it to the model, and watch for the completion
//! signal. Nothing here blocks on its own beyond the poll timeout.

use std::time::Duration;

use log::debug;
use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PromptError;
use crate::tui::Theme;
use crate::tui::setup::TerminalSession;

/// How long one poll waits for an event before the loop ticks anyway.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Completion signal produced by a prompt's key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    /// The user confirmed; the model's output becomes the result.
    Submit,
    /// The user cancelled the interaction.
    Abort,
}

/// Seam between the event loop and each prompt's state.
///
/// A prompt implements this with its local mutable state, a key handler
/// that mutates that state and signals completion, and a render function.
pub(crate) trait PromptModel {
    type Output;

    /// Handles one decoded key press.
    fn handle_key(&mut self, key: &KeyEvent) -> Option<Signal>;

    /// Called once per loop iteration, between events.
    fn tick(&mut self) {}

    /// Number of terminal rows the inline viewport needs.
    fn view_height(&self) -> u16;

    /// Draws the prompt into the viewport.
    fn render(&self, frame: &mut Frame<'_>, theme: &Theme);

    /// Consumes the model after a submit signal.
    fn into_output(self) -> Result<Self::Output, PromptError>;
}

/// True for the global cancel chords, Esc and Ctrl-C.
pub(crate) fn is_abort_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Runs one prompt session to completion and clears it from the screen.
pub(crate) fn run<M: PromptModel>(mut model: M, theme: &Theme) -> Result<M::Output, PromptError> {
    let mut session = TerminalSession::inline(model.view_height())?;
    debug!("prompt session started");
    let signal = loop {
        session
            .terminal_mut()
            .draw(|frame| model.render(frame, theme))?;
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(signal) = model.handle_key(&key) {
                        break signal;
                    }
                }
                _ => {}
            }
        }
        model.tick();
    };
    session.finish()?;
    debug!("prompt session ended: {signal:?}");
    match signal {
        Signal::Submit => model.into_output(),
        Signal::Abort => Err(PromptError::Aborted),
    }
}
