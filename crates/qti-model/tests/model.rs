//! Tests for qti-model types.

use qti_model::{
    CellValue, GenerationError, GenerationErrorCode, GenerationSummary, QuestionFailure,
    QuestionKind, QuestionType, RoleMapping, Row, ValidationResult, ValidationStatus,
    ValidationSummary,
};

fn result(status_issues: Vec<qti_model::ValidationIssue>) -> ValidationResult {
    ValidationResult::new("row_0", 1, QuestionType::Mcq, status_issues)
}

#[test]
fn cell_text_is_trimmed_and_blank_is_missing() {
    assert_eq!(CellValue::from("  Paris ").text().as_deref(), Some("Paris"));
    assert_eq!(CellValue::from("   ").text(), None);
    assert_eq!(CellValue::Missing.text(), None);
}

#[test]
fn whole_numbers_render_without_fraction() {
    assert_eq!(CellValue::from(3.0).text().as_deref(), Some("3"));
    assert_eq!(CellValue::from(0.0).text().as_deref(), Some("0"));
    assert_eq!(CellValue::from(2.5).text().as_deref(), Some("2.5"));
    assert!(CellValue::from(" 9.81 ").is_numeric());
    assert!(!CellValue::from("nine").is_numeric());
}

#[test]
fn row_lookup_defaults_to_missing() {
    let row = Row::new("q1").with_cell("Question", "What is H2O?");
    assert!(row.has_value(Some("Question")));
    assert!(!row.has_value(Some("Answer")));
    assert!(!row.has_value(None));
    assert_eq!(row.get("Nope"), &CellValue::Missing);
}

#[test]
fn status_derivation() {
    assert_eq!(result(vec![]).status, ValidationStatus::Valid);
    assert_eq!(
        result(vec![qti_model::ValidationIssue::warning("Topic", "Topic field is empty")]).status,
        ValidationStatus::Caution
    );
    assert!(ValidationStatus::Caution.is_exportable());
    assert!(!ValidationStatus::Rejected.is_exportable());
}

#[test]
fn summary_counts_statuses() {
    let results = vec![
        result(vec![]),
        result(vec![qti_model::ValidationIssue::warning("Grade", "Points/Grade value missing")]),
        result(vec![qti_model::ValidationIssue::critical(
            "Correct Answer",
            "Missing correct answer",
        )]),
    ];
    let summary = ValidationSummary::from_results(&results);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.caution, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.exportable(), 2);
}

#[test]
fn result_serializes_camel_case() {
    let json = serde_json::to_value(result(vec![])).expect("serialize result");
    assert_eq!(json["rowId"], "row_0");
    assert_eq!(json["status"], "valid");
    assert_eq!(json["detectedType"], "mcq");
    assert_eq!(json["ruleVersion"], "1.0");
}

#[test]
fn declared_types_are_normalized() {
    assert_eq!(QuestionType::from_declared(" MCQ "), QuestionType::Mcq);
    assert_eq!(QuestionType::from_declared("TextEntry"), QuestionType::ShortAnswer);
    assert_eq!(
        QuestionType::from_declared("Essay"),
        QuestionType::Other("essay".to_string())
    );
    assert_eq!(QuestionType::Other("essay".to_string()).kind(), None);
    assert_eq!("orderinteraction".parse::<QuestionKind>(), Ok(QuestionKind::Order));
}

#[test]
fn mapping_round_trips_with_camel_case_keys() {
    let mapping = RoleMapping {
        question_col: Some("Question".to_string()),
        option_cols: vec!["A".to_string(), "B".to_string()],
        ..RoleMapping::default()
    };
    let json = serde_json::to_value(&mapping).expect("serialize mapping");
    assert_eq!(json["questionCol"], "Question");
    assert_eq!(json["optionCols"][1], "B");
    let round: RoleMapping = serde_json::from_value(json).expect("deserialize mapping");
    assert_eq!(round, mapping);
    assert_eq!(round.claimed_columns(), vec!["Question", "A", "B"]);
}

#[test]
fn generation_summary_rate() {
    let summary = GenerationSummary {
        total: 3,
        success: 1,
        failed: 2,
        errors: vec![QuestionFailure {
            question_id: "Q2".to_string(),
            error: GenerationError::new(GenerationErrorCode::InvalidStatus, "bad"),
        }],
    };
    assert!(summary.has_failures());
    assert!((summary.success_rate() - 33.333).abs() < 0.01);
    assert_eq!(GenerationSummary::default().success_rate(), 0.0);
    assert_eq!(
        summary.errors[0].error.to_string(),
        "[INVALID_STATUS] bad"
    );
}
