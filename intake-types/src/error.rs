use crate::AnswerKey;

/// Error type for typed answer access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for key: {0}")]
    Missing(AnswerKey),

    #[error("Type mismatch at key '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: AnswerKey,
        expected: &'static str,
        actual: &'static str,
    },
}

impl AnswerError {
    /// Check if this error represents an unanswered question.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}
