//! Question classification and row validation.
//!
//! Validation is a pure function of `(row, mapping)`: the same inputs always
//! produce the same issues and status. Only `validated_at` differs between
//! runs.

pub mod classify;
mod checks;

use std::time::Instant;

use qti_model::{RoleMapping, Row, ValidationResult, ValidationSummary};
use tracing::{debug, info};

pub use checks::run_all;
pub use classify::{detect_question_type, option_values};

/// Validate one row. `row_number` is the caller's 1-based position.
pub fn validate_row(row: &Row, row_number: usize, mapping: &RoleMapping) -> ValidationResult {
    let detected_type = detect_question_type(row, mapping);
    let issues = run_all(row, mapping, &detected_type);
    let result = ValidationResult::new(row.id.clone(), row_number, detected_type, issues);
    debug!(
        row_id = %result.row_id,
        row_number,
        question_type = %result.detected_type,
        status = result.status.label(),
        errors = result.error_count,
        warnings = result.warning_count,
        "row validated"
    );
    result
}

/// Validate every row, numbering them from 1 in input order.
pub fn validate_rows(rows: &[Row], mapping: &RoleMapping) -> Vec<ValidationResult> {
    let start = Instant::now();
    let results: Vec<ValidationResult> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| validate_row(row, index + 1, mapping))
        .collect();
    let summary = summarize(&results);
    info!(
        rows = summary.total,
        valid = summary.valid,
        caution = summary.caution,
        rejected = summary.rejected,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    results
}

/// Status counts over `results`.
pub fn summarize(results: &[ValidationResult]) -> ValidationSummary {
    ValidationSummary::from_results(results)
}
