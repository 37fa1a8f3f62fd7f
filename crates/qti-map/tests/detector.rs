//! Tests for column role detection.

use qti_map::{detect_roles, unclaimed_columns};

#[test]
fn detects_typical_header() {
    let columns = [
        "Question", "A", "B", "C", "D", "Answer", "Type", "Difficulty", "Solution", "Points",
        "Subject", "Topic",
    ];
    let mapping = detect_roles(&columns);
    assert_eq!(mapping.question(), Some("Question"));
    assert_eq!(mapping.answer(), Some("Answer"));
    assert_eq!(mapping.question_type(), Some("Type"));
    assert_eq!(mapping.difficulty(), Some("Difficulty"));
    assert_eq!(mapping.solution(), Some("Solution"));
    assert_eq!(mapping.points(), Some("Points"));
    assert_eq!(mapping.subject(), Some("Subject"));
    assert_eq!(mapping.topic(), Some("Topic"));
    assert_eq!(mapping.tolerance(), None);
    assert_eq!(mapping.order(), None);
    assert_eq!(mapping.option_cols, vec!["A", "B", "C", "D"]);
}

#[test]
fn first_matching_column_wins() {
    let mapping = detect_roles(&["Problem", "Question Text", "Correct", "Answer Key"]);
    assert_eq!(mapping.question(), Some("Problem"));
    assert_eq!(mapping.answer(), Some("Correct"));
}

#[test]
fn synonyms_are_recognised() {
    let mapping = detect_roles(&[
        "Stem", "Marks", "Category", "Chapter", "Explanation", "Level", "Margin", "Sequence",
    ]);
    assert_eq!(mapping.question(), Some("Stem"));
    assert_eq!(mapping.points(), Some("Marks"));
    assert_eq!(mapping.subject(), Some("Category"));
    assert_eq!(mapping.topic(), Some("Chapter"));
    assert_eq!(mapping.solution(), Some("Explanation"));
    assert_eq!(mapping.difficulty(), Some("Level"));
    assert_eq!(mapping.tolerance(), Some("Margin"));
    assert_eq!(mapping.order(), Some("Sequence"));
}

#[test]
fn one_column_can_fill_several_roles() {
    let mapping = detect_roles(&["QuestionType", "Prompt"]);
    assert_eq!(mapping.question(), Some("QuestionType"));
    assert_eq!(mapping.question_type(), Some("QuestionType"));
}

#[test]
fn option_columns_keep_input_order() {
    let mapping = detect_roles(&["option 2", "Option1", "optionC", "Notes"]);
    assert_eq!(mapping.option_cols, vec!["option 2", "Option1", "optionC"]);
}

#[test]
fn empty_header_resolves_nothing() {
    let mapping = detect_roles::<&str>(&[]);
    assert!(mapping.resolved_roles().is_empty());
    assert!(mapping.option_cols.is_empty());
}

#[test]
fn unclaimed_columns_are_reported() {
    let columns = vec![
        "Question".to_string(),
        "A".to_string(),
        "B".to_string(),
        "Author".to_string(),
        "Answer".to_string(),
        "Created".to_string(),
    ];
    let mapping = detect_roles(&columns);
    assert_eq!(unclaimed_columns(&columns, &mapping), vec!["Author", "Created"]);
}
