//! Base field checks applied to every row.

use qti_model::{RoleMapping, Row, ValidationIssue};

const MIN_STEM_CHARS: usize = 5;

/// Check identifier, stem, answer, and the recommended metadata fields.
pub fn check(row: &Row, mapping: &RoleMapping) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if row.id.trim().is_empty() {
        issues.push(ValidationIssue::critical(
            "Identifier",
            "Missing unique identifier for question",
        ));
    }

    let stem_ok = row
        .text(mapping.question())
        .is_some_and(|stem| stem.chars().count() >= MIN_STEM_CHARS);
    if !stem_ok {
        issues.push(ValidationIssue::critical(
            "Question Stem",
            "Question text is missing or too short (minimum 5 characters)",
        ));
    }

    // Type is inferred when absent, so only a warning
    if !row.has_value(mapping.question_type()) {
        issues.push(ValidationIssue::warning(
            "Question Type",
            "Question type will be auto-detected",
        ));
    }

    if !row.has_value(mapping.answer()) {
        issues.push(ValidationIssue::critical(
            "Correct Answer",
            "Missing correct answer",
        ));
    }

    let recommended = [
        (mapping.points(), "Grade", "Points/Grade value missing"),
        (mapping.subject(), "Subject", "Subject field is empty"),
        (mapping.topic(), "Topic", "Topic field is empty"),
        (mapping.difficulty(), "Difficulty", "Difficulty level missing"),
        (
            mapping.solution(),
            "Solution",
            "Solution/Explanation is recommended but not provided",
        ),
    ];
    for (column, field, message) in recommended {
        if !row.has_value(column) {
            issues.push(ValidationIssue::warning(field, message));
        }
    }

    issues
}
