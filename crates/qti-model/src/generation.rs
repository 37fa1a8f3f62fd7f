use serde::{Deserialize, Serialize};

use crate::enums::QuestionKind;
use crate::validation::ValidationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    Pending,
    Success,
    Failed,
}

/// Canonical codec input, mapped from a validated row right before
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub identifier: String,
    pub stem: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub validation_status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_status: Option<GenerationStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generation_errors: Vec<GenerationError>,
}

impl Question {
    /// A pending multiple-choice question with `Valid` status.
    pub fn mcq(
        id: impl Into<String>,
        identifier: impl Into<String>,
        stem: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            identifier: identifier.into(),
            stem: stem.into(),
            kind: QuestionKind::Mcq,
            options,
            correct_answer: correct_answer.into(),
            validation_status: ValidationStatus::Valid,
            generated_output: None,
            generation_status: None,
            generation_errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: ValidationStatus) -> Self {
        self.validation_status = status;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationErrorCode {
    /// Question was not in an exportable validation state.
    InvalidStatus,
    /// Question kind has no strict builder.
    UnsupportedType,
    /// XML was produced but failed the structural check.
    XmlValidationFailed,
    /// The MCQ builder refused the input.
    McqGenerationError,
    GenerationError,
}

impl GenerationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidStatus => "INVALID_STATUS",
            Self::UnsupportedType => "UNSUPPORTED_TYPE",
            Self::XmlValidationFailed => "XML_VALIDATION_FAILED",
            Self::McqGenerationError => "MCQ_GENERATION_ERROR",
            Self::GenerationError => "GENERATION_ERROR",
        }
    }
}

impl std::fmt::Display for GenerationErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationError {
    pub code: GenerationErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GenerationError {
    pub fn new(code: GenerationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFailure {
    pub question_id: String,
    pub error: GenerationError,
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub errors: Vec<QuestionFailure>,
}

impl GenerationSummary {
    /// Success percentage in `0.0..=100.0`; zero for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.success as f64 / self.total as f64 * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
