//! CSV question sheets.
//!
//! The header row names the columns. An `id` column (any case) supplies row
//! ids; rows without one are numbered `row_{index}` from zero. Blank cells
//! become [`CellValue::Missing`].

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use qti_model::{CellValue, Row, Table};
use thiserror::Error;

/// Errors raised while reading a question sheet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// Failed to open or parse the CSV file.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row is missing or has no named column.
    #[error("no header row in {path}")]
    NoHeader { path: PathBuf },
}

/// Reads the CSV file at `path`.
pub fn read_question_sheet(path: &Path) -> Result<Table, IngestError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    read_table(reader, path)
}

/// Reads CSV text from any reader; `origin` is only used in errors.
pub fn read_question_sheet_from<R: Read>(input: R, origin: &Path) -> Result<Table, IngestError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    read_table(reader, origin)
}

fn read_table<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Table, IngestError> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    let id_column = columns
        .iter()
        .position(|name| name.eq_ignore_ascii_case("id"));

    let mut table = Table::new(columns);
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let id = id_column
            .and_then(|position| record.get(position))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| format!("row_{index}"), ToString::to_string);

        let mut row = Row::new(id);
        for (column, value) in table.columns.iter().zip(record.iter()) {
            if column.is_empty() {
                continue;
            }
            let cell = if value.trim().is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            };
            row.cells.insert(column.clone(), cell);
        }
        table.push_row(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "question sheet loaded"
    );
    Ok(table)
}
