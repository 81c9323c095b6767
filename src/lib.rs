//! `promptkit` - terminal prompt widgets
//!
//! A small collection of inline terminal prompts: single-select with a
//! live substring filter, yes/no confirm, free-text input, and a spinner.
//! Each prompt packages a piece of local state, a key handler, and a
//! render function, driven by a synchronous event loop over an inline
//! ratatui viewport.

pub mod cli;
pub mod error;
pub mod filter;
pub mod line;
pub mod prompts;
pub mod tui;

pub use error::PromptError;
pub use filter::{CursorMove, Entry, FilterList, highlight_span};
pub use line::LineEdit;
pub use prompts::{Confirm, Input, Select, Spinner, SpinnerHandle};
pub use tui::Theme;
