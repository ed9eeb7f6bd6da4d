//! CLI argument definitions for flightcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use flight_cli::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "flightcheck",
    version,
    about = "Validate flight records and classify carrier codes",
    long_about = "Validate flight records and classify carrier codes.\n\n\
                  Valid records are written with their carrier code type (IATA or ICAO);\n\
                  rejected records are written to a separate file with the reason."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process an input file and write accepted and rejected records.
    DetectCode(DetectCodeArgs),

    /// List the validation checks in the order they run.
    Rules,
}

#[derive(Parser)]
pub struct DetectCodeArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Path of the CSV file receiving accepted records.
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Path of the CSV file receiving rejected records.
    #[arg(long = "errors", value_name = "PATH", default_value = "error.csv")]
    pub errors_path: PathBuf,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with a failure status when any record is rejected.
    #[arg(long = "strict")]
    pub strict: bool,

    /// How to print the run summary.
    #[arg(long = "summary-format", value_enum, default_value = "table")]
    pub summary_format: SummaryFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
