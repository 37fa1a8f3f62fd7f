use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use qti_cli::ingest::read_question_sheet;
use qti_cli::logging::redact_value;
use qti_cli::output::{default_output_dir, write_files};
use qti_core::{
    ExportFormat, ExportOptions, ExportedFile, FileNames, GenerationOptions, export_rows,
    generate_batch,
};
use qti_map::{detect_roles, unclaimed_columns};
use qti_model::{Question, Table};
use qti_output::QtiVersion;
use qti_validate::{summarize, validate_rows};

use crate::cli::{
    ConvertArgs, DetectArgs, ExportFormatArg, GenerateArgs, QtiVersionArg, ValidateArgs,
};
use crate::types::{ConvertResult, DetectResult, GenerateResult, ValidateResult};

pub fn run_detect(args: &DetectArgs) -> Result<DetectResult> {
    let table = load_sheet(&args.input)?;
    let mapping = detect_roles(&table.columns);
    let unclaimed = unclaimed_columns(&table.columns, &mapping)
        .into_iter()
        .map(ToString::to_string)
        .collect();
    Ok(DetectResult {
        input: args.input.clone(),
        columns: table.columns,
        mapping,
        unclaimed,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let table = load_sheet(&args.input)?;
    let mapping = detect_roles(&table.columns);

    let span = info_span!("validate", rows = table.rows.len());
    let results = span.in_scope(|| {
        for row in &table.rows {
            let stem = row.text(mapping.question()).unwrap_or_default();
            trace!(row_id = %row.id, question = redact_value(&stem), "validating row");
        }
        validate_rows(&table.rows, &mapping)
    });
    let summary = summarize(&results);
    Ok(ValidateResult {
        input: args.input.clone(),
        results,
        summary,
    })
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let table = load_sheet(&args.input)?;
    let mapping = detect_roles(&table.columns);

    let options = ExportOptions {
        legacy_fallback: !args.no_fallback,
        ..ExportOptions::default()
    }
    .with_version(match args.qti_version {
        QtiVersionArg::V2_1 => QtiVersion::V2_1,
        QtiVersionArg::V2_2 => QtiVersion::V2_2,
    })
    .with_format(match args.format {
        ExportFormatArg::Xml => ExportFormat::Xml,
        ExportFormatArg::Json => ExportFormat::Json,
    });

    let span = info_span!("export", version = %options.version, rows = table.rows.len());
    let run = span
        .in_scope(|| export_rows(&table.rows, &mapping, &options))
        .context("export questions")?;

    let output_dir = if args.dry_run {
        info!(files = run.files.len(), "dry run, nothing written");
        None
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.input));
        write_files(&dir, &run.files)?;
        Some(dir)
    };

    Ok(ConvertResult {
        input: args.input.clone(),
        output_dir,
        run,
    })
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let questions: Vec<Question> = serde_json::from_str(&text)
        .with_context(|| format!("parse questions from {}", args.input.display()))?;

    let options = GenerationOptions {
        accept_caution: args.accept_caution,
    };
    let run = generate_batch(&questions, &options);

    let mut names = FileNames::new();
    let files: Vec<ExportedFile> = run
        .questions
        .iter()
        .filter_map(|question| {
            question.generated_output.as_ref().map(|xml| ExportedFile {
                name: names.claim(&question.identifier, ".xml"),
                contents: xml.clone(),
            })
        })
        .collect();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let written = write_files(&output_dir, &files)?;

    Ok(GenerateResult {
        input: args.input.clone(),
        output_dir,
        run,
        written,
    })
}

fn load_sheet(path: &Path) -> Result<Table> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table =
        read_question_sheet(path).with_context(|| format!("load {}", path.display()))?;
    info!(
        columns = table.columns.len(),
        rows = table.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}
