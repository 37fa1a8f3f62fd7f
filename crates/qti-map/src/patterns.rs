//! Substring patterns used to recognise each column role.
//!
//! Patterns are matched against the lowercased column name. Order within a
//! list does not matter; order of columns does (first match wins).

pub const QUESTION_PATTERNS: &[&str] = &["question", "query", "problem", "stem", "text"];
pub const ANSWER_PATTERNS: &[&str] = &["answer", "correct"];
pub const TYPE_PATTERNS: &[&str] = &["type", "qtype", "questiontype"];
pub const DIFFICULTY_PATTERNS: &[&str] = &["difficulty", "level", "difficulty_level"];
pub const SOLUTION_PATTERNS: &[&str] = &["solution", "explanation", "remark"];
pub const POINTS_PATTERNS: &[&str] = &["points", "marks", "score", "weight", "grade"];
pub const SUBJECT_PATTERNS: &[&str] = &["subject", "category", "domain"];
pub const TOPIC_PATTERNS: &[&str] = &["topic", "subtopic", "unit", "chapter"];
pub const TOLERANCE_PATTERNS: &[&str] = &["tolerance", "margin", "tolerance_value"];
pub const ORDER_PATTERNS: &[&str] = &["order", "sequence", "arrange", "order_items"];

/// True when the lowercased `column` contains any of `patterns`.
pub fn matches_any(column: &str, patterns: &[&str]) -> bool {
    let lowered = column.to_lowercase();
    patterns.iter().any(|pattern| lowered.contains(pattern))
}
