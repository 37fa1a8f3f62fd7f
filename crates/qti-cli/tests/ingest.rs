//! Reading question sheets from disk.

use std::fs;

use qti_cli::ingest::{IngestError, read_question_sheet};
use qti_map::detect_roles;
use qti_model::{CellValue, ValidationStatus};
use qti_validate::validate_rows;

const SHEET: &str = "\
Question,Option A,Option B,Option C,Answer,Type,Points,Subject,Topic,Difficulty,Explanation
What is the SI unit of force?,Newton,Joule,Pascal,A,mcq,1,Physics,Mechanics,easy,Force is measured in newtons.
Why?,,,,,mcq,,,,,
";

#[test]
fn sheet_rows_flow_into_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("questions.csv");
    fs::write(&path, SHEET).expect("write csv");

    let table = read_question_sheet(&path).expect("read sheet");
    assert_eq!(table.columns.len(), 11);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].id, "row_0");
    assert_eq!(table.rows[1].get("Option A"), &CellValue::Missing);

    let mapping = detect_roles(&table.columns);
    assert_eq!(mapping.option_cols, vec!["Option A", "Option B", "Option C"]);

    let results = validate_rows(&table.rows, &mapping);
    assert_eq!(results[0].status, ValidationStatus::Valid);
    assert_eq!(results[1].status, ValidationStatus::Rejected);
}

#[test]
fn missing_file_is_a_csv_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = read_question_sheet(&dir.path().join("absent.csv")).expect_err("missing file");
    assert!(matches!(error, IngestError::Csv { .. }));
    assert!(error.to_string().contains("absent.csv"));
}
