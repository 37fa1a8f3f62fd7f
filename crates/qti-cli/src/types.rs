use std::path::PathBuf;

use qti_core::{BatchRun, ExportRun};
use qti_model::{RoleMapping, ValidationResult, ValidationSummary};

#[derive(Debug)]
pub struct DetectResult {
    pub input: PathBuf,
    pub columns: Vec<String>,
    pub mapping: RoleMapping,
    pub unclaimed: Vec<String>,
}

#[derive(Debug)]
pub struct ValidateResult {
    pub input: PathBuf,
    pub results: Vec<ValidationResult>,
    pub summary: ValidationSummary,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output_dir: Option<PathBuf>,
    pub run: ExportRun,
}

#[derive(Debug)]
pub struct GenerateResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub run: BatchRun,
    pub written: Vec<PathBuf>,
}
