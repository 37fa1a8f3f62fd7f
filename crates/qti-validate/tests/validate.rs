//! Row validation behaviour.

use qti_map::detect_roles;
use qti_model::{QuestionType, RoleMapping, Row, ValidationStatus};
use qti_validate::{summarize, validate_row, validate_rows};

const COLUMNS: &[&str] = &[
    "Question", "A", "B", "C", "D", "Answer", "Type", "Difficulty", "Solution", "Points", "Subject",
    "Topic", "Tolerance", "Order",
];

fn mapping() -> RoleMapping {
    detect_roles(COLUMNS)
}

/// A fully populated MCQ row that validates cleanly.
fn complete_mcq() -> Row {
    Row::new("q1")
        .with_cell("Question", "What is the SI unit of force?")
        .with_cell("A", "Newton")
        .with_cell("B", "Joule")
        .with_cell("C", "Pascal")
        .with_cell("D", "Watt")
        .with_cell("Answer", "A")
        .with_cell("Type", "mcq")
        .with_cell("Difficulty", "easy")
        .with_cell("Solution", "Force is measured in newtons.")
        .with_cell("Points", 1.0)
        .with_cell("Subject", "Physics")
        .with_cell("Topic", "Mechanics")
}

fn messages(row: &Row) -> Vec<String> {
    validate_row(row, 1, &mapping())
        .issues()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect()
}

#[test]
fn complete_mcq_is_valid() {
    let result = validate_row(&complete_mcq(), 1, &mapping());
    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.detected_type, QuestionType::Mcq);
    assert_eq!(result.error_count, 0);
    assert_eq!(result.warning_count, 0);
    assert_eq!(result.rule_version, "1.0");
}

#[test]
fn missing_metadata_gives_caution() {
    let row = complete_mcq().with_cell("Subject", "  ").with_cell("Points", "");
    let result = validate_row(&row, 4, &mapping());
    assert_eq!(result.status, ValidationStatus::Caution);
    assert_eq!(result.row_number, 4);
    let fields: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
    assert_eq!(fields, vec!["Grade", "Subject"]);
}

#[test]
fn zero_points_counts_as_present() {
    let row = complete_mcq().with_cell("Points", 0.0);
    assert_eq!(validate_row(&row, 1, &mapping()).status, ValidationStatus::Valid);
}

#[test]
fn short_stem_and_missing_answer_are_critical() {
    let row = complete_mcq().with_cell("Question", "Why?").with_cell("Answer", "");
    let result = validate_row(&row, 1, &mapping());
    assert_eq!(result.status, ValidationStatus::Rejected);
    let fields: Vec<&str> = result.critical_errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["Question Stem", "Correct Answer"]);
}

#[test]
fn blank_identifier_is_critical() {
    let mut row = complete_mcq();
    row.id = "   ".to_string();
    assert!(messages(&row).contains(&"Identifier: Missing unique identifier for question".to_string()));
}

#[test]
fn mcq_answer_out_of_range() {
    let row = complete_mcq()
        .with_cell("C", "")
        .with_cell("D", "")
        .with_cell("Answer", "4");
    let found = messages(&row);
    assert!(found.contains(&"Options: Only 2 options in MCQ (3 or more recommended)".to_string()));
    assert!(found.contains(&"Correct Answer: Correct answer (4) exceeds number of options (2)".to_string()));
}

#[test]
fn mcq_answer_format() {
    let row = complete_mcq().with_cell("Answer", "z");
    assert!(messages(&row).contains(
        &"Correct Answer: Invalid correct answer format: \"Z\" (use A-H or 1-8)".to_string()
    ));
}

#[test]
fn mcq_duplicates_and_short_options_warn() {
    let row = complete_mcq().with_cell("B", " newton ").with_cell("D", "W");
    let result = validate_row(&row, 1, &mapping());
    assert_eq!(result.status, ValidationStatus::Caution);
    let found = messages(&row);
    assert!(found.contains(&"Options: Duplicate options detected".to_string()));
    assert!(found.contains(&"Option 4: Option text too short (minimum 3 characters)".to_string()));
}

#[test]
fn mcq_without_option_columns_stops_early() {
    let mapping = RoleMapping {
        question_col: Some("Question".to_string()),
        answer_col: Some("Answer".to_string()),
        type_col: Some("Type".to_string()),
        option_cols: vec!["A".to_string()],
        ..RoleMapping::default()
    };
    let result = validate_row(&complete_mcq(), 1, &mapping);
    let options: Vec<&str> = result
        .critical_errors
        .iter()
        .filter(|e| e.field == "Options")
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(options, vec!["No option columns found for MCQ (minimum 2 required)"]);
    assert!(result.critical_errors.iter().all(|e| e.field != "Correct Answer"));
}

#[test]
fn msq_checks_answer_list() {
    let row = complete_mcq().with_cell("Type", "MSQ").with_cell("Answer", "A, X, 9");
    let result = validate_row(&row, 1, &mapping());
    assert_eq!(result.detected_type, QuestionType::Msq);
    assert!(messages(&row).contains(
        &"Correct Answers: Invalid answer format: \"X, 9\" (use A-H or 1-8, comma-separated)"
            .to_string()
    ));

    let single = complete_mcq().with_cell("Type", "msq").with_cell("Answer", "b");
    let result = validate_row(&single, 1, &mapping());
    assert_eq!(result.status, ValidationStatus::Caution);
    assert_eq!(
        result.warnings[0].message,
        "MSQ should have multiple correct answers (use comma-separated list)"
    );
}

#[test]
fn msq_blank_answer_tokens_are_invalid() {
    for answer in ["A,,B", "A,"] {
        let row = complete_mcq().with_cell("Type", "msq").with_cell("Answer", answer);
        let result = validate_row(&row, 1, &mapping());
        assert_eq!(result.status, ValidationStatus::Rejected, "answer {answer:?}");
        assert_eq!(
            messages(&row),
            vec!["Correct Answers: Invalid answer format: \"\" (use A-H or 1-8, comma-separated)"]
        );
    }
}

#[test]
fn short_answer_rules() {
    let row = Row::new("q2")
        .with_cell("Question", "What is g on Earth in m/s^2?")
        .with_cell("Answer", "9.81")
        .with_cell("Difficulty", "easy")
        .with_cell("Solution", "Standard gravity.")
        .with_cell("Points", 2.0)
        .with_cell("Subject", "Physics")
        .with_cell("Topic", "Gravity");
    let result = validate_row(&row, 1, &mapping());
    assert_eq!(result.detected_type, QuestionType::ShortAnswer);
    let warnings: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
    assert_eq!(warnings, vec!["Question Type", "Tolerance"]);

    let with_tolerance = row.clone().with_cell("Tolerance", 0.01);
    let result = validate_row(&with_tolerance, 1, &mapping());
    assert_eq!(result.warning_count, 1);

    let with_option = row.with_cell("Type", "textentry").with_cell("A", "9.8");
    let result = validate_row(&with_option, 1, &mapping());
    assert_eq!(result.status, ValidationStatus::Rejected);
    assert_eq!(
        result.critical_errors[0].message,
        "Text entry type should not have options"
    );
}

#[test]
fn order_rules() {
    let base = complete_mcq()
        .with_cell("Type", "order")
        .with_cell("A", "")
        .with_cell("B", "")
        .with_cell("C", "")
        .with_cell("D", "");
    let result = validate_row(&base, 1, &mapping());
    assert_eq!(result.critical_errors[0].message, "No items found for ordering");

    let one = base.clone().with_cell("Order", "Mercury, ,");
    let result = validate_row(&one, 1, &mapping());
    assert_eq!(
        result.critical_errors[0].message,
        "Insufficient items for ordering (found 1, need at least 2)"
    );

    let ok = base.with_cell("Order", "Mercury, Venus, Earth");
    assert_eq!(validate_row(&ok, 1, &mapping()).status, ValidationStatus::Valid);
}

#[test]
fn unknown_declared_type_only_gets_base_rules() {
    let row = complete_mcq().with_cell("Type", "Essay").with_cell("Answer", "anything");
    let result = validate_row(&row, 1, &mapping());
    assert_eq!(result.detected_type, QuestionType::Other("essay".to_string()));
    assert_eq!(result.status, ValidationStatus::Valid);
}

#[test]
fn validation_is_repeatable() {
    let row = complete_mcq().with_cell("Answer", "G");
    let first = validate_row(&row, 3, &mapping());
    let second = validate_row(&row, 3, &mapping());
    assert_eq!(first.status, second.status);
    assert_eq!(first.critical_errors, second.critical_errors);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.detected_type, second.detected_type);
}

#[test]
fn batch_numbers_rows_from_one() {
    let rows = vec![
        complete_mcq(),
        complete_mcq().with_cell("Topic", ""),
        complete_mcq().with_cell("Answer", ""),
    ];
    let results = validate_rows(&rows, &mapping());
    let numbers: Vec<usize> = results.iter().map(|r| r.row_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let summary = summarize(&results);
    assert_eq!((summary.valid, summary.caution, summary.rejected), (1, 1, 1));
}
