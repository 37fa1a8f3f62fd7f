//! QTI Studio CLI.

use clap::{ColorChoice, Parser};
use qti_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_convert, run_detect, run_generate, run_validate};
use crate::summary::{print_convert, print_detect, print_generation, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Detect(args) => report(run_detect(args), |result| {
            print_detect(&result);
            0
        }),
        Command::Validate(args) => report(run_validate(args), |result| {
            if args.json {
                match serde_json::to_string_pretty(&result.results) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: {error}");
                        return 1;
                    }
                }
            } else {
                print_validation(&result);
            }
            i32::from(args.fail_on_rejected && result.summary.rejected > 0)
        }),
        Command::Convert(args) => report(run_convert(args), |result| {
            print_convert(&result);
            i32::from(result.run.summary.has_failures())
        }),
        Command::Generate(args) => report(run_generate(args), |result| {
            print_generation(&result);
            i32::from(result.run.summary.has_failures())
        }),
    };
    std::process::exit(exit_code);
}

/// Exit code from a command result; errors print to stderr and give 1.
fn report<T>(result: anyhow::Result<T>, on_success: impl FnOnce(T) -> i32) -> i32 {
    match result {
        Ok(value) => on_success(value),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
