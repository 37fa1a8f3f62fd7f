//! Command-line arguments for `qti-studio`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qti-studio",
    version,
    about = "Validate question spreadsheets and convert them to QTI",
    long_about = "Validate question spreadsheets and convert them to QTI.\n\n\
                  Reads CSV question sheets, detects column roles, classifies and\n\
                  validates every row, and writes QTI 2.1/2.2 XML items or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow question text in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show which column fills each role.
    Detect(DetectArgs),

    /// Validate every row and print the verdicts.
    Validate(ValidateArgs),

    /// Export rows to QTI XML or JSON.
    Convert(ConvertArgs),

    /// Run the strict generator over a JSON array of questions.
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct DetectArgs {
    /// CSV question sheet.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// CSV question sheet.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Print results as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Exit with status 1 when any row is rejected.
    #[arg(long = "fail-on-rejected")]
    pub fail_on_rejected: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// CSV question sheet.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output directory (default: <CSV stem>_qti next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "xml")]
    pub format: ExportFormatArg,

    /// Target QTI version for XML output.
    #[arg(long = "qti-version", value_enum, default_value = "2.1")]
    pub qti_version: QtiVersionArg,

    /// Report multiple-choice rows the strict builder refuses instead of
    /// rendering them with the row converter.
    #[arg(long = "no-fallback")]
    pub no_fallback: bool,

    /// Validate and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON file holding an array of questions.
    #[arg(value_name = "QUESTIONS_JSON")]
    pub input: PathBuf,

    /// Output directory (default: <input stem>_qti next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also generate questions whose validation ended in Caution.
    #[arg(long = "accept-caution")]
    pub accept_caution: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Xml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QtiVersionArg {
    #[value(name = "2.1")]
    V2_1,
    #[value(name = "2.2")]
    V2_2,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
