//! Plain-text batch report.

use qti_model::GenerationSummary;

const RULE_WIDTH: usize = 50;

/// Renders `summary` as a line-oriented report.
///
/// The success rate is printed with two decimals (`0%` for an empty batch).
/// Each failure gets a block of question id, code, and message followed by a
/// blank line.
pub fn batch_report(summary: &GenerationSummary) -> String {
    let rate = if summary.total > 0 {
        format!("{:.2}", summary.success_rate())
    } else {
        "0".to_string()
    };
    let mut lines = vec![
        "QTI Generation Report".to_string(),
        "=".repeat(RULE_WIDTH),
        format!("Total Questions: {}", summary.total),
        format!("Successfully Generated: {}", summary.success),
        format!("Failed: {}", summary.failed),
        format!("Success Rate: {rate}%"),
    ];

    if !summary.errors.is_empty() {
        lines.push(String::new());
        lines.push("Errors:".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for failure in &summary.errors {
            lines.push(format!("Question ID: {}", failure.question_id));
            lines.push(format!("Code: {}", failure.error.code));
            lines.push(format!("Message: {}", failure.error.message));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
