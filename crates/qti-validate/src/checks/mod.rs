//! Validation rule modules.
//!
//! The base rules apply to every row; the type rules are selected by the
//! detected question type.

mod base;
mod choice;
mod order;
mod short_answer;

use qti_model::{QuestionType, RoleMapping, Row, ValidationIssue};

/// Run the base rules, then the rules for `question_type`.
pub fn run_all(
    row: &Row,
    mapping: &RoleMapping,
    question_type: &QuestionType,
) -> Vec<ValidationIssue> {
    // 1. Fields every question needs
    let mut issues = base::check(row, mapping);

    // 2. Type-specific structure
    match question_type {
        QuestionType::Mcq => choice::check_mcq(row, mapping, &mut issues),
        QuestionType::Msq => choice::check_msq(row, mapping, &mut issues),
        QuestionType::ShortAnswer => short_answer::check(row, mapping, &mut issues),
        QuestionType::Order => order::check(row, mapping, &mut issues),
        QuestionType::TrueFalse | QuestionType::Other(_) => {}
    }

    issues
}
