//! Error types for quiz-core.
//!
//! Extraction itself never fails; these cover the fallible edges around it.

use thiserror::Error;

use crate::types::OptionLabel;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by prompt rendering, noise rule configuration and quiz sessions.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no notes provided for quiz generation")]
    EmptyNotes,

    #[error("invalid noise pattern '{pattern}': {source}")]
    InvalidNoisePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("question {index} does not exist")]
    UnknownQuestion { index: usize },

    #[error("question {index} has no option {label}")]
    UnknownOption { index: usize, label: OptionLabel },

    #[error("answers are revealed; selection is locked")]
    AnswersRevealed,
}
