//! Strict generation over canonical questions.

use std::time::Instant;

use qti_model::{
    GenerationError, GenerationErrorCode, GenerationStatus, GenerationSummary, Question,
    QuestionFailure, QuestionKind,
};
use qti_output::generate_and_validate_mcq;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::options::GenerationOptions;

/// Result of generating one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOutcome {
    /// Copy of the input with generation fields filled in.
    pub question: Question,
    pub error: Option<GenerationError>,
}

impl QuestionOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Updated questions plus the aggregate summary of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRun {
    pub questions: Vec<Question>,
    pub summary: GenerationSummary,
}

/// Pre-flight check over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Generates QTI for one question.
///
/// Gates run in order: validation status, then question kind, then the
/// strict builder and its structural check. The input is never modified;
/// the returned copy carries the output or the error.
pub fn generate_question(question: &Question, options: &GenerationOptions) -> QuestionOutcome {
    let mut updated = question.clone();
    match try_generate(question, options) {
        Ok(xml) => {
            updated.generated_output = Some(xml);
            updated.generation_status = Some(GenerationStatus::Success);
            updated.generation_errors.clear();
            QuestionOutcome {
                question: updated,
                error: None,
            }
        }
        Err(error) => {
            updated.generation_status = Some(GenerationStatus::Failed);
            updated.generation_errors.push(error.clone());
            QuestionOutcome {
                question: updated,
                error: Some(error),
            }
        }
    }
}

fn try_generate(question: &Question, options: &GenerationOptions) -> Result<String, GenerationError> {
    if !options.admits(question.validation_status) {
        return Err(GenerationError::new(
            GenerationErrorCode::InvalidStatus,
            format!(
                "Question validation status is '{}', not 'Valid'",
                question.validation_status.label()
            ),
        ));
    }
    if question.kind != QuestionKind::Mcq {
        return Err(GenerationError::new(
            GenerationErrorCode::UnsupportedType,
            format!(
                "Question type '{}' is not supported in this version (only MCQ)",
                question.kind
            ),
        ));
    }
    generate_and_validate_mcq(question)
}

/// Generates every question in order; one failure never stops the batch.
pub fn generate_batch(questions: &[Question], options: &GenerationOptions) -> BatchRun {
    let start = Instant::now();
    let mut summary = GenerationSummary {
        total: questions.len(),
        ..GenerationSummary::default()
    };
    let mut updated = Vec::with_capacity(questions.len());

    for question in questions {
        let outcome = generate_question(question, options);
        match &outcome.error {
            None => {
                summary.success += 1;
                debug!(question_id = %question.id, "question generated");
            }
            Some(error) => {
                summary.failed += 1;
                warn!(question_id = %question.id, code = %error.code, "question failed: {}", error.message);
                summary.errors.push(QuestionFailure {
                    question_id: question.id.clone(),
                    error: error.clone(),
                });
            }
        }
        updated.push(outcome.question);
    }

    info!(
        total = summary.total,
        success = summary.success,
        failed = summary.failed,
        duration_ms = start.elapsed().as_millis(),
        "generation batch complete"
    );
    BatchRun {
        questions: updated,
        summary,
    }
}

/// Lists every reason a batch cannot be generated as-is.
pub fn check_generation_eligibility(
    questions: &[Question],
    options: &GenerationOptions,
) -> Eligibility {
    let mut errors = Vec::new();
    for question in questions {
        let id = &question.identifier;
        if !options.admits(question.validation_status) {
            errors.push(format!(
                "Question {id}: Invalid validation status '{}'",
                question.validation_status.label()
            ));
        }
        if question.kind != QuestionKind::Mcq {
            errors.push(format!(
                "Question {id}: Unsupported type '{}' (only MCQ supported)",
                question.kind
            ));
        }
        if question.options.len() < 2 {
            errors.push(format!("Question {id}: Insufficient options (need at least 2)"));
        }
        if question.correct_answer.trim().is_empty() {
            errors.push(format!("Question {id}: No correct answer specified"));
        }
    }
    Eligibility {
        valid: errors.is_empty(),
        errors,
    }
}
