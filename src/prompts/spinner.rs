//! Busy indicator running on a background render thread.
//!
//! The caller starts the spinner, does its work, then stops it through a
//! one-shot channel; `stop` joins the thread and reports how the session
//! ended. The final "done" text is pushed into scrollback so it stays
//! visible after the spinner disappears.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::error::PromptError;
use crate::prompts::runner::POLL_INTERVAL;
use crate::tui::Theme;
use crate::tui::setup::TerminalSession;

/// How often the spinner advances one animation frame.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Animated busy indicator with a text label.
///
/// ```no_run
/// use promptkit::Spinner;
///
/// let spinner = Spinner::new("Resolving dependencies...")
///     .done_text("dependencies resolved")
///     .start();
/// // ... do the slow work ...
/// spinner.stop()?;
/// # Ok::<(), promptkit::PromptError>(())
/// ```
pub struct Spinner {
    text: String,
    done_text: String,
    theme: Theme,
}

impl Spinner {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done_text: String::new(),
            theme: Theme::default(),
        }
    }

    /// Text left on screen after the spinner stops.
    #[must_use]
    pub fn done_text(mut self, done_text: impl Into<String>) -> Self {
        self.done_text = done_text.into();
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Spawns the render thread and hands back the stop handle.
    #[must_use]
    pub fn start(self) -> SpinnerHandle {
        let (stop_tx, stop_rx) = mpsc::channel();
        let join = thread::spawn(move || spin(&self, &stop_rx));
        SpinnerHandle { stop_tx, join }
    }
}

/// Handle owned by the caller while the spinner runs.
pub struct SpinnerHandle {
    stop_tx: mpsc::Sender<()>,
    join: JoinHandle<Result<(), PromptError>>,
}

impl SpinnerHandle {
    /// Signals the spinner to stop and waits for the terminal to be
    /// released.
    ///
    /// # Errors
    ///
    /// [`PromptError::Aborted`] when the user pressed Ctrl-C while the
    /// spinner was running, [`PromptError::Io`] when the render thread
    /// hit a terminal failure or panicked.
    pub fn stop(self) -> Result<(), PromptError> {
        let _ = self.stop_tx.send(());
        match self.join.join() {
            Ok(result) => result,
            Err(_) => Err(PromptError::Io(std::io::Error::other(
                "spinner render thread panicked",
            ))),
        }
    }
}

/// True for the one chord that interrupts a spinner.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn spin(spinner: &Spinner, stop_rx: &Receiver<()>) -> Result<(), PromptError> {
    let mut session = TerminalSession::inline(1)?;
    let mut state = ThrobberState::default();
    let mut last_tick = Instant::now();
    let mut aborted = false;
    debug!("spinner started");

    loop {
        session.terminal_mut().draw(|frame| {
            let symbol = Throbber::default()
                .style(spinner.theme.accent_style())
                .throbber_style(spinner.theme.accent_style())
                .to_symbol_span(&state);
            let line = Line::from(vec![
                Span::raw(" "),
                symbol,
                Span::styled(spinner.text.as_str(), spinner.theme.normal_style()),
            ]);
            frame.render_widget(Paragraph::new(line), frame.area());
        })?;

        match stop_rx.try_recv() {
            // A dropped sender counts as a stop request too.
            Ok(()) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => {}
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && is_interrupt(&key)
            {
                aborted = true;
                break;
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            state.calc_next();
            last_tick = Instant::now();
        }
    }

    if aborted {
        session.finish()?;
        debug!("spinner interrupted");
        return Err(PromptError::Aborted);
    }

    if !spinner.done_text.is_empty() {
        let done = spinner.done_text.clone();
        session.print_above(move |buf| {
            let area = buf.area;
            Widget::render(Line::from(done), area, buf);
        })?;
    }
    session.finish()?;
    debug!("spinner stopped");
    Ok(())
}
