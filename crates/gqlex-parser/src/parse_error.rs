/// The single error kind produced by the lexer and parser.
///
/// Carries only a human-readable message. There is no recoverable variant:
/// any raised error is a total parse failure, and callers must not attempt
/// to resume with the same cursor state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
