//! Error types for QTI item construction.

use qti_model::{GenerationError, GenerationErrorCode};
use thiserror::Error;

/// Reasons the strict builder refuses a question, plus writer failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Identifier is blank.
    #[error("Question identifier is required")]
    MissingIdentifier,

    /// Stem is blank.
    #[error("Question stem is required")]
    MissingStem,

    /// Fewer than two options.
    #[error("Question must have at least 2 options")]
    TooFewOptions {
        /// Number of options supplied.
        found: usize,
    },

    /// More options than single-letter identifiers.
    #[error("Question has {found} options (maximum 26)")]
    TooManyOptions {
        /// Number of options supplied.
        found: usize,
    },

    /// Correct answer is blank.
    #[error("Correct answer is required")]
    MissingAnswer,

    /// Answer is neither a single letter nor a number in range.
    #[error("Invalid correct answer format: \"{0}\". Must be A-Z or 1-26")]
    InvalidAnswerFormat(String),

    /// Answer points past the last option.
    #[error("Correct answer \"{answer}\" exceeds number of options ({options})")]
    AnswerOutOfRange {
        /// Normalized answer label.
        answer: String,
        /// Number of options supplied.
        options: usize,
    },

    /// The XML writer failed.
    #[error("XML write failed: {0}")]
    Write(String),
}

impl From<BuildError> for GenerationError {
    fn from(error: BuildError) -> Self {
        let code = match error {
            BuildError::Write(_) => GenerationErrorCode::GenerationError,
            _ => GenerationErrorCode::McqGenerationError,
        };
        GenerationError::new(code, error.to_string())
    }
}
