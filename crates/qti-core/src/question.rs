//! Mapping validated rows onto canonical questions.

use std::borrow::Cow;

use qti_model::{
    GenerationError, GenerationErrorCode, Question, QuestionType, RoleMapping, Row,
    ValidationResult,
};
use qti_validate::option_values;

/// Maximum identifier length taken from the question text.
const IDENTIFIER_CHARS: usize = 50;

/// Builds the canonical question for a validated row.
///
/// The identifier is the first 50 characters of the question text, or
/// `q-{row id}` when there is none. Options are the non-empty option cells
/// in column order. No answer is invented when the cell is blank.
pub fn build_question(
    row: &Row,
    mapping: &RoleMapping,
    result: &ValidationResult,
) -> Result<Question, GenerationError> {
    let kind = result.detected_type.kind().ok_or_else(|| unsupported(&result.detected_type))?;
    let stem = row
        .text(mapping.question())
        .map(Cow::into_owned)
        .unwrap_or_default();

    Ok(Question {
        id: row.id.clone(),
        identifier: identifier_for(row, &stem),
        stem,
        kind,
        options: option_values(row, mapping),
        correct_answer: row
            .text(mapping.answer())
            .map(Cow::into_owned)
            .unwrap_or_default(),
        validation_status: result.status,
        generated_output: None,
        generation_status: None,
        generation_errors: Vec::new(),
    })
}

/// Identifier used for file names: a prefix of the question text, or
/// `q-{row id}` for a row without one.
pub(crate) fn question_identifier(row: &Row, mapping: &RoleMapping) -> String {
    identifier_for(row, row.text(mapping.question()).as_deref().unwrap_or_default())
}

fn identifier_for(row: &Row, stem: &str) -> String {
    if stem.is_empty() {
        format!("q-{}", row.id)
    } else {
        stem.chars().take(IDENTIFIER_CHARS).collect()
    }
}

fn unsupported(question_type: &QuestionType) -> GenerationError {
    GenerationError::new(
        GenerationErrorCode::UnsupportedType,
        format!("Question type '{question_type}' is not supported for export"),
    )
}
