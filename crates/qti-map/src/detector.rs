//! Column role detection.

use std::sync::LazyLock;

use qti_model::RoleMapping;
use regex::Regex;
use tracing::debug;

use crate::patterns::{
    ANSWER_PATTERNS, DIFFICULTY_PATTERNS, ORDER_PATTERNS, POINTS_PATTERNS, QUESTION_PATTERNS,
    SOLUTION_PATTERNS, SUBJECT_PATTERNS, TOLERANCE_PATTERNS, TOPIC_PATTERNS, TYPE_PATTERNS,
    matches_any,
};

/// `optionA`..`optionH`, `option 1`..`option 8`, or the bare letter/number.
static OPTION_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(option\s*)?([a-h]|[1-8])$").expect("valid option column regex")
});

/// Assigns spreadsheet columns to question roles.
///
/// Each role takes the first column (in input order) whose name contains one
/// of its patterns. Roles are resolved independently, so a single column can
/// satisfy more than one role. Option columns are every column whose trimmed
/// name looks like an option label, in input order.
pub fn detect_roles<S: AsRef<str>>(columns: &[S]) -> RoleMapping {
    let names: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
    let first_match = |patterns: &[&str]| {
        names
            .iter()
            .find(|column| matches_any(column, patterns))
            .map(|column| (*column).to_string())
    };

    let mapping = RoleMapping {
        question_col: first_match(QUESTION_PATTERNS),
        answer_col: first_match(ANSWER_PATTERNS),
        type_col: first_match(TYPE_PATTERNS),
        difficulty_col: first_match(DIFFICULTY_PATTERNS),
        solution_col: first_match(SOLUTION_PATTERNS),
        points_col: first_match(POINTS_PATTERNS),
        subject_col: first_match(SUBJECT_PATTERNS),
        topic_col: first_match(TOPIC_PATTERNS),
        tolerance_col: first_match(TOLERANCE_PATTERNS),
        order_col: first_match(ORDER_PATTERNS),
        option_cols: names
            .iter()
            .filter(|column| is_option_column(column))
            .map(|column| (*column).to_string())
            .collect(),
    };

    debug!(
        columns = columns.len(),
        roles = mapping.resolved_roles().len(),
        options = mapping.option_cols.len(),
        "detected column roles"
    );
    mapping
}

/// True when the trimmed column name is an option label.
pub fn is_option_column(column: &str) -> bool {
    OPTION_COLUMN.is_match(column.trim())
}

/// Columns that no role claimed, in input order.
pub fn unclaimed_columns<'a, S: AsRef<str>>(
    columns: &'a [S],
    mapping: &RoleMapping,
) -> Vec<&'a str> {
    let claimed = mapping.claimed_columns();
    columns
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|column| !claimed.contains(column))
        .collect()
}
