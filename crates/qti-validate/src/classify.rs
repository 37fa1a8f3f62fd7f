//! Question type classification.

use std::borrow::Cow;

use qti_model::{QuestionType, RoleMapping, Row};

/// Infers the question type of a row.
///
/// A populated type column always wins. Otherwise a populated order column
/// means an ordering question, two boolean-looking options mean true/false,
/// two or more options mean multiple choice, and anything else is treated as
/// a short answer. Multiple-select is only reachable through the type column.
pub fn detect_question_type(row: &Row, mapping: &RoleMapping) -> QuestionType {
    if let Some(declared) = row.text(mapping.question_type()) {
        return QuestionType::from_declared(&declared);
    }

    if row.has_value(mapping.order()) {
        return QuestionType::Order;
    }

    let options = option_values(row, mapping);
    if options.len() == 2 && is_boolean_pair(&options) {
        return QuestionType::TrueFalse;
    }
    if options.len() >= 2 {
        return QuestionType::Mcq;
    }

    QuestionType::ShortAnswer
}

/// Non-empty option cell values, in option column order.
pub fn option_values(row: &Row, mapping: &RoleMapping) -> Vec<String> {
    mapping
        .option_cols
        .iter()
        .filter_map(|column| row.get(column).text())
        .map(Cow::into_owned)
        .collect()
}

fn is_boolean_pair(options: &[String]) -> bool {
    let lowered: Vec<String> = options.iter().map(|option| option.to_lowercase()).collect();
    let has = |value: &str| lowered.iter().any(|option| option == value);
    (has("true") && has("false")) || (has("yes") && has("no"))
}
