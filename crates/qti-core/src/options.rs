//! Configuration options for generation and export.

use qti_model::ValidationStatus;
use qti_output::QtiVersion;
use serde::{Deserialize, Serialize};

/// Options for the strict generation path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Also generate questions whose validation ended in `Caution`.
    /// Default: false (only `Valid` questions are generated).
    pub accept_caution: bool,
}

impl GenerationOptions {
    /// Admit `Caution` questions as well as `Valid` ones.
    pub fn lenient() -> Self {
        Self {
            accept_caution: true,
        }
    }

    /// Whether a question with `status` passes the status gate.
    pub fn admits(&self, status: ValidationStatus) -> bool {
        match status {
            ValidationStatus::Valid => true,
            ValidationStatus::Caution => self.accept_caution,
            ValidationStatus::Rejected => false,
        }
    }
}

/// Output document format for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One QTI `assessmentItem` file per question.
    #[default]
    Xml,
    /// A single `questions.json` document.
    Json,
}

/// Options controlling spreadsheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Target QTI version for XML output.
    pub version: QtiVersion,

    pub format: ExportFormat,

    /// Render multiple-choice rows with the row converter when the strict
    /// builder refuses them.
    pub legacy_fallback: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            version: QtiVersion::V2_1,
            format: ExportFormat::Xml,
            legacy_fallback: true,
        }
    }
}

impl ExportOptions {
    /// Strict builder only: multiple-choice rows it refuses are reported as
    /// failures instead of falling back.
    pub fn strict() -> Self {
        Self {
            legacy_fallback: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: QtiVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }
}
