//! Interactive prompt sessions.
//!
//! Each prompt is a builder whose `run` call blocks on an inline-terminal
//! event loop and returns the result by value. Cancellation is reported
//! as [`crate::PromptError::Aborted`] rather than terminating the
//! process, so prompts compose inside larger applications.

pub mod confirm;
pub mod input;
pub(crate) mod runner;
pub mod select;
pub mod spinner;

pub use confirm::Confirm;
pub use input::Input;
pub use select::Select;
pub use spinner::{Spinner, SpinnerHandle};
