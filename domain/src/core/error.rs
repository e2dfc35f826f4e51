//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised only while building domain values. A failed construction means the
/// value never exists; there is no partially built session or ladder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Expected exactly {expected} questions, got {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("Question index {index} is outside 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid prize ladder: {0}")]
    InvalidLadder(String),

    #[error("Invalid session snapshot: {0}")]
    InvalidSnapshot(String),
}

impl DomainError {
    /// Check if this error came from a malformed question set or position
    pub fn is_construction_shape(&self) -> bool {
        matches!(
            self,
            DomainError::QuestionCount { .. } | DomainError::IndexOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_count_display() {
        let error = DomainError::QuestionCount {
            expected: 15,
            actual: 14,
        };
        assert_eq!(error.to_string(), "Expected exactly 15 questions, got 14");
    }

    #[test]
    fn test_is_construction_shape() {
        assert!(DomainError::IndexOutOfRange { index: 15, len: 15 }.is_construction_shape());
        assert!(!DomainError::InvalidQuestion("empty".to_string()).is_construction_shape());
        assert!(!DomainError::InvalidLadder("short".to_string()).is_construction_shape());
    }
}
