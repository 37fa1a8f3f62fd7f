//! Orchestration for question sets.
//!
//! - [`generate_batch`] runs the strict generator over canonical questions,
//!   one outcome per question, and [`batch_report`] renders its summary.
//! - [`export_rows`] takes spreadsheet rows end to end: validation,
//!   conversion, and rendering to QTI XML files or one JSON document.

mod export;
mod generation;
mod options;
mod question;
mod report;

pub use export::{
    ExportError, ExportRun, ExportedFile, FileNames, JSON_FILE_NAME, export_rows,
    sanitize_file_stem,
};
pub use generation::{
    BatchRun, Eligibility, QuestionOutcome, check_generation_eligibility, generate_batch,
    generate_question,
};
pub use options::{ExportFormat, ExportOptions, GenerationOptions};
pub use question::build_question;
pub use report::batch_report;
