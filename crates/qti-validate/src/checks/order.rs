//! Ordering interaction checks.

use qti_model::{RoleMapping, Row, ValidationIssue};

pub fn check(row: &Row, mapping: &RoleMapping, issues: &mut Vec<ValidationIssue>) {
    let Some(items) = row.text(mapping.order()) else {
        issues.push(ValidationIssue::critical(
            "Order Items",
            "No items found for ordering",
        ));
        return;
    };

    let count = items.split(',').filter(|item| !item.trim().is_empty()).count();
    if count < 2 {
        issues.push(ValidationIssue::critical(
            "Order Items",
            format!("Insufficient items for ordering (found {count}, need at least 2)"),
        ));
    }
}
