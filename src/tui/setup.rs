//! Terminal session setup for inline prompts.
//!
//! Prompts render through an inline viewport so they appear at the shell
//! cursor instead of taking over the whole screen. Raw mode is restored
//! by a guard even if a prompt panics mid-session.

use std::io::{Stdout, stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, TerminalOptions, Viewport};

/// Guard that disables raw mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// One terminal session: an inline viewport plus the raw-mode guard that
/// outlives every draw call.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _raw: RawModeGuard,
}

impl TerminalSession {
    /// Enters raw mode and opens an inline viewport of `height` rows.
    pub(crate) fn inline(height: u16) -> std::io::Result<Self> {
        let raw = RawModeGuard::new()?;
        let terminal = Terminal::with_options(
            CrosstermBackend::new(stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Self {
            terminal,
            _raw: raw,
        })
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Pushes one rendered line into scrollback above the viewport, so it
    /// stays visible after the session ends.
    pub(crate) fn print_above(&mut self, draw: impl FnOnce(&mut Buffer)) -> std::io::Result<()> {
        self.terminal.insert_before(1, draw)
    }

    /// Clears the prompt area and releases the terminal.
    pub(crate) fn finish(mut self) -> std::io::Result<()> {
        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
