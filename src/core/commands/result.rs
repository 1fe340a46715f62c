//! Command execution result type.

use crate::config::CLEAR_SENTINEL;

/// Result of executing a command.
///
/// Commands either produce text or ask the caller to clear its transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Text to display (possibly empty).
    Output(String),
    /// The caller must clear the visible transcript.
    Clear,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(text: impl Into<String>) -> Self {
        Self::Output(text.into())
    }

    /// Create an empty result (no output).
    pub fn empty() -> Self {
        Self::Output(String::new())
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear)
    }

    /// Flatten into the single-string form, mapping `Clear` to
    /// [`CLEAR_SENTINEL`].
    pub fn into_text(self) -> String {
        match self {
            Self::Output(text) => text,
            Self::Clear => CLEAR_SENTINEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text() {
        assert_eq!(CommandResult::output("hi").into_text(), "hi");
        assert_eq!(CommandResult::empty().into_text(), "");
        assert_eq!(CommandResult::Clear.into_text(), CLEAR_SENTINEL);
    }

    #[test]
    fn test_is_clear() {
        assert!(CommandResult::Clear.is_clear());
        assert!(!CommandResult::output(CLEAR_SENTINEL).is_clear());
    }
}
