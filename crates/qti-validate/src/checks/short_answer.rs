//! Short answer (text entry) checks.

use qti_model::{RoleMapping, Row, ValidationIssue};

pub fn check(row: &Row, mapping: &RoleMapping, issues: &mut Vec<ValidationIssue>) {
    let has_option = mapping
        .option_cols
        .iter()
        .any(|column| row.get(column).is_present());
    if has_option {
        issues.push(ValidationIssue::critical(
            "Options",
            "Text entry type should not have options",
        ));
    }

    let Some(answer) = row.text(mapping.answer()) else {
        return;
    };
    if answer.chars().count() < 2 {
        issues.push(ValidationIssue::warning(
            "Correct Answer",
            "Expected answer is too short",
        ));
    }

    let numeric = mapping
        .answer()
        .is_some_and(|column| row.get(column).is_numeric());
    if numeric && !row.has_value(mapping.tolerance()) {
        issues.push(ValidationIssue::warning(
            "Tolerance",
            "Numeric answer should have tolerance value",
        ));
    }
}
