//! Error taxonomy for prompt interactions.

use thiserror::Error;

/// Errors surfaced by a prompt session.
///
/// Filtering and cursor movement are total and cannot fail; everything
/// that can go wrong happens at the session boundary.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The selection was confirmed while the filtered view was empty.
    /// Recoverable: the caller decides whether to re-prompt.
    #[error("no entry matched the query; nothing was selected")]
    NoSelection,

    /// The user cancelled the interaction with Esc or Ctrl-C.
    ///
    /// Reported as an outcome instead of terminating the process, so a
    /// prompt can be embedded inside a larger interactive session. An
    /// application that wants shell-style behavior maps this to exit
    /// status 130 at its own boundary.
    #[error("interaction aborted by user")]
    Aborted,

    /// Terminal setup, drawing, or event polling failed.
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// True for user-initiated cancellation.
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the abort predicate distinguishes cancellation.
    #[test]
    fn is_abort_matches_only_aborted() {
        assert!(PromptError::Aborted.is_abort());
        assert!(!PromptError::NoSelection.is_abort());
        assert!(!PromptError::Io(std::io::Error::other("boom")).is_abort());
    }

    /// Tests io errors convert through the From impl.
    #[test]
    fn io_errors_convert() {
        let err: PromptError = std::io::Error::other("boom").into();
        assert!(matches!(err, PromptError::Io(_)));
    }

    /// Tests display messages are stable and user-facing.
    #[test]
    fn display_messages() {
        assert_eq!(
            PromptError::NoSelection.to_string(),
            "no entry matched the query; nothing was selected"
        );
        assert_eq!(PromptError::Aborted.to_string(), "interaction aborted by user");
    }
}
