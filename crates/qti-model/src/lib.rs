//! Shared data model for question validation and QTI generation.

pub mod answer;
pub mod enums;
pub mod generation;
pub mod mapping;
pub mod table;
pub mod validation;

pub use enums::{QuestionKind, QuestionType};
pub use generation::{
    GenerationError, GenerationErrorCode, GenerationStatus, GenerationSummary, Question,
    QuestionFailure,
};
pub use mapping::RoleMapping;
pub use table::{CellValue, Row, Table};
pub use validation::{
    RULE_VERSION, Severity, ValidationIssue, ValidationResult, ValidationStatus,
    ValidationSummary,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_status_follows_issue_severity() {
        let result = ValidationResult::new(
            "row_0",
            1,
            QuestionType::Mcq,
            vec![
                ValidationIssue::warning("Subject", "Subject field is empty"),
                ValidationIssue::critical("Correct Answer", "Missing correct answer"),
            ],
        );
        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn question_serializes() {
        let question = Question::mcq(
            "Q001",
            "MATH_001",
            "What is 2 + 2?",
            vec!["3".to_string(), "4".to_string()],
            "B",
        );
        let json = serde_json::to_string(&question).expect("serialize question");
        assert!(json.contains("\"type\":\"MCQ\""));
        let round: Question = serde_json::from_str(&json).expect("deserialize question");
        assert_eq!(round, question);
    }
}
