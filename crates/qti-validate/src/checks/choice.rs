//! Multiple-choice and multiple-select checks.

use std::collections::BTreeSet;

use qti_model::answer::{ROW_LABEL_LIMIT, single_char_choice_index};
use qti_model::{RoleMapping, Row, ValidationIssue};

use crate::classify::option_values;

const MIN_OPTION_CHARS: usize = 3;

/// Single-answer multiple choice.
pub fn check_mcq(row: &Row, mapping: &RoleMapping, issues: &mut Vec<ValidationIssue>) {
    if mapping.option_cols.len() < 2 {
        issues.push(ValidationIssue::critical(
            "Options",
            "No option columns found for MCQ (minimum 2 required)",
        ));
        return;
    }

    let options = option_values(row, mapping);
    match options.len() {
        0 | 1 => issues.push(ValidationIssue::critical(
            "Options",
            format!(
                "Not enough options provided (found {}, need at least 2)",
                options.len()
            ),
        )),
        2 => issues.push(ValidationIssue::warning(
            "Options",
            "Only 2 options in MCQ (3 or more recommended)",
        )),
        _ => {}
    }

    let distinct: BTreeSet<String> = options.iter().map(|option| option.to_lowercase()).collect();
    if distinct.len() < options.len() {
        issues.push(ValidationIssue::warning(
            "Options",
            "Duplicate options detected",
        ));
    }

    for (index, option) in options.iter().enumerate() {
        if option.chars().count() < MIN_OPTION_CHARS {
            issues.push(ValidationIssue::warning(
                format!("Option {}", index + 1),
                "Option text too short (minimum 3 characters)",
            ));
        }
    }

    let Some(answer) = row.text(mapping.answer()) else {
        return;
    };
    let answer = answer.to_uppercase();
    match single_char_choice_index(&answer, ROW_LABEL_LIMIT) {
        None => issues.push(ValidationIssue::critical(
            "Correct Answer",
            format!("Invalid correct answer format: \"{answer}\" (use A-H or 1-8)"),
        )),
        Some(index) if index >= options.len() => issues.push(ValidationIssue::critical(
            "Correct Answer",
            format!(
                "Correct answer ({answer}) exceeds number of options ({})",
                options.len()
            ),
        )),
        Some(_) => {}
    }
}

/// Multiple select; the answer is a comma-separated list of labels.
pub fn check_msq(row: &Row, mapping: &RoleMapping, issues: &mut Vec<ValidationIssue>) {
    if mapping.option_cols.len() < 2 {
        issues.push(ValidationIssue::critical(
            "Options",
            "No option columns found for MSQ (minimum 2 required)",
        ));
        return;
    }

    let options = option_values(row, mapping);
    match options.len() {
        0 | 1 => issues.push(ValidationIssue::critical(
            "Options",
            format!(
                "Not enough options (found {}, need at least 2)",
                options.len()
            ),
        )),
        2 => issues.push(ValidationIssue::warning(
            "Options",
            "Only 2 options in MSQ (3 or more recommended)",
        )),
        _ => {}
    }

    let Some(answer) = row.text(mapping.answer()) else {
        return;
    };
    let tokens = answer_tokens(&answer);
    match tokens.len() {
        0 => issues.push(ValidationIssue::critical(
            "Correct Answers",
            "No correct answers specified",
        )),
        1 => issues.push(ValidationIssue::warning(
            "Correct Answers",
            "MSQ should have multiple correct answers (use comma-separated list)",
        )),
        _ => {}
    }

    let invalid: Vec<&str> = tokens
        .iter()
        .filter(|token| single_char_choice_index(token, ROW_LABEL_LIMIT).is_none())
        .map(String::as_str)
        .collect();
    if !invalid.is_empty() {
        issues.push(ValidationIssue::critical(
            "Correct Answers",
            format!(
                "Invalid answer format: \"{}\" (use A-H or 1-8, comma-separated)",
                invalid.join(", ")
            ),
        ));
    }
}

/// Splits a multi-answer cell on commas. Blank tokens are kept so the
/// label check can reject them.
pub fn answer_tokens(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(|token| token.trim().to_uppercase())
        .collect()
}
