//! Spreadsheet export: validate, convert, and render every row.

use std::collections::BTreeSet;
use std::time::Instant;

use qti_model::{
    GenerationError, GenerationErrorCode, GenerationSummary, QuestionFailure, QuestionKind,
    RoleMapping, Row, ValidationResult,
};
use qti_output::{
    QtiItem, QtiVersion, convert_row, export_json, generate_and_validate_mcq, render_item,
};
use qti_validate::validate_row;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::options::{ExportFormat, ExportOptions};
use crate::question::{build_question, question_identifier};

/// File name of the JSON export document.
pub const JSON_FILE_NAME: &str = "questions.json";

/// Errors that abort an export as a whole.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The JSON document could not be serialized.
    #[error("failed to serialize JSON export: {0}")]
    Json(#[from] serde_json::Error),
}

/// One output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// File name relative to the output directory.
    pub name: String,
    pub contents: String,
}

/// Everything produced by [`export_rows`].
#[derive(Debug, Clone)]
pub struct ExportRun {
    /// Validation verdict per row, in input order.
    pub results: Vec<ValidationResult>,
    pub files: Vec<ExportedFile>,
    pub summary: GenerationSummary,
    /// Multiple-choice rows rendered by the row converter after the strict
    /// builder refused them.
    pub fallbacks: usize,
}

/// Validates and exports every row.
///
/// Rejected rows are skipped and reported as failures. Rows of an
/// unrecognized type are exported as short-answer items. For QTI 2.1 XML,
/// multiple-choice rows go through the strict builder (with optional
/// fallback); every other row, and every row for QTI 2.2, goes through the
/// row converter.
pub fn export_rows(
    rows: &[Row],
    mapping: &RoleMapping,
    options: &ExportOptions,
) -> Result<ExportRun, ExportError> {
    let start = Instant::now();
    let mut run = ExportRun {
        results: Vec::with_capacity(rows.len()),
        files: Vec::new(),
        summary: GenerationSummary {
            total: rows.len(),
            ..GenerationSummary::default()
        },
        fallbacks: 0,
    };
    let mut names = FileNames::new();
    let mut items: Vec<QtiItem> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let result = validate_row(row, index + 1, mapping);
        let outcome = match options.format {
            ExportFormat::Xml => export_xml(row, mapping, &result, options).map(|rendered| {
                run.fallbacks += usize::from(rendered.fallback);
                run.files.push(ExportedFile {
                    name: names.claim(&rendered.identifier, ".xml"),
                    contents: rendered.xml,
                });
            }),
            ExportFormat::Json => exportable_kind(&result).map(|kind| {
                items.push(convert_row(row, kind, mapping));
            }),
        };

        match outcome {
            Ok(()) => run.summary.success += 1,
            Err(error) => {
                warn!(row_id = %row.id, code = %error.code, "row not exported: {}", error.message);
                run.summary.failed += 1;
                run.summary.errors.push(QuestionFailure {
                    question_id: row.id.clone(),
                    error,
                });
            }
        }
        run.results.push(result);
    }

    if options.format == ExportFormat::Json {
        let document = export_json(&items);
        run.files.push(ExportedFile {
            name: JSON_FILE_NAME.to_string(),
            contents: serde_json::to_string_pretty(&document)?,
        });
    }

    info!(
        rows = run.summary.total,
        exported = run.summary.success,
        skipped = run.summary.failed,
        fallbacks = run.fallbacks,
        files = run.files.len(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(run)
}

/// Status gate shared by both formats. An unrecognized declared type is
/// treated as free-text short answer.
fn exportable_kind(result: &ValidationResult) -> Result<QuestionKind, GenerationError> {
    if !result.status.is_exportable() {
        return Err(GenerationError::new(
            GenerationErrorCode::InvalidStatus,
            format!(
                "Question validation status is '{}', not 'Valid'",
                result.status.label()
            ),
        ));
    }
    Ok(result.detected_type.kind().unwrap_or_else(|| {
        debug!(declared = %result.detected_type, "unrecognized type exported as short answer");
        QuestionKind::ShortAnswer
    }))
}

/// One row rendered as XML.
struct RenderedXml {
    identifier: String,
    xml: String,
    /// Set when the row converter stood in for the strict builder.
    fallback: bool,
}

fn export_xml(
    row: &Row,
    mapping: &RoleMapping,
    result: &ValidationResult,
    options: &ExportOptions,
) -> Result<RenderedXml, GenerationError> {
    let kind = exportable_kind(result)?;
    let identifier = question_identifier(row, mapping);
    let legacy = |fallback: bool| {
        render_item(&convert_row(row, kind, mapping), options.version)
            .map(|xml| RenderedXml {
                identifier: identifier.clone(),
                xml,
                fallback,
            })
            .map_err(GenerationError::from)
    };

    if kind != QuestionKind::Mcq || options.version != QtiVersion::V2_1 {
        return legacy(false);
    }

    let strict = build_question(row, mapping, result).and_then(|question| {
        generate_and_validate_mcq(&question)
    });
    match strict {
        Ok(xml) => {
            debug!(row_id = %row.id, "row rendered by strict builder");
            Ok(RenderedXml {
                identifier: identifier.clone(),
                xml,
                fallback: false,
            })
        }
        Err(error) if options.legacy_fallback => {
            warn!(
                row_id = %row.id,
                code = %error.code,
                "strict builder refused row, using row converter: {}",
                error.message
            );
            legacy(true)
        }
        Err(error) => Err(error),
    }
}

/// Hands out unique, file-system safe names.
#[derive(Debug, Default)]
pub struct FileNames {
    taken: BTreeSet<String>,
}

impl FileNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitized `identifier` plus `extension`; repeats get `_2`, `_3`, ...
    /// and an identifier with nothing usable becomes `Q{n}`.
    pub fn claim(&mut self, identifier: &str, extension: &str) -> String {
        let stem = sanitize_file_stem(identifier);
        let stem = if stem.is_empty() {
            format!("Q{}", self.taken.len() + 1)
        } else {
            stem
        };
        let mut name = format!("{stem}{extension}");
        let mut counter = 2;
        while self.taken.contains(&name) {
            name = format!("{stem}_{counter}{extension}");
            counter += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}

/// Keeps ASCII letters, digits, `-` and `_`; everything else becomes `_`.
/// Runs of `_` collapse and leading/trailing `_` are dropped.
pub fn sanitize_file_stem(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    for ch in identifier.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '-' { ch } else { '_' };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_string()
}
