use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// Version tag stamped on every validation result.
pub const RULE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks export eligibility.
    Critical,
    /// Informational; export still allowed.
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
        }
    }
}

/// A single finding produced by a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Human-facing field label (e.g., "Question Stem", "Option 2").
    pub field: String,
    pub message: String,
    pub level: Severity,
}

impl ValidationIssue {
    pub fn critical(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            level: Severity::Critical,
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            level: Severity::Warning,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.level == Severity::Critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Caution,
    Rejected,
}

impl ValidationStatus {
    /// Derives the status from issue counts.
    pub fn from_counts(critical: usize, warnings: usize) -> Self {
        if critical > 0 {
            Self::Rejected
        } else if warnings > 0 {
            Self::Caution
        } else {
            Self::Valid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Caution => "Caution",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether a row with this status may be exported.
    pub fn is_exportable(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Verdict for one row. A pure projection of `(row, mapping)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub row_id: String,
    pub row_number: usize,
    pub status: ValidationStatus,
    pub detected_type: QuestionType,
    pub critical_errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub validated_at: DateTime<Utc>,
    pub rule_version: String,
}

impl ValidationResult {
    /// Splits `issues` by severity and derives status and counts from them.
    pub fn new(
        row_id: impl Into<String>,
        row_number: usize,
        detected_type: QuestionType,
        issues: Vec<ValidationIssue>,
    ) -> Self {
        let (critical_errors, warnings): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(ValidationIssue::is_critical);
        let status = ValidationStatus::from_counts(critical_errors.len(), warnings.len());
        Self {
            row_id: row_id.into(),
            row_number,
            status,
            detected_type,
            error_count: critical_errors.len(),
            warning_count: warnings.len(),
            critical_errors,
            warnings,
            validated_at: Utc::now(),
            rule_version: RULE_VERSION.to_string(),
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.critical_errors.iter().chain(self.warnings.iter())
    }
}

/// Status counts over a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub caution: usize,
    pub rejected: usize,
}

impl ValidationSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            match result.status {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Caution => summary.caution += 1,
                ValidationStatus::Rejected => summary.rejected += 1,
            }
        }
        summary
    }

    pub fn exportable(&self) -> usize {
        self.valid + self.caution
    }
}
