//! flightcheck CLI.

use clap::{ColorChoice, Parser};
use flight_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, SummaryFormatArg};
use crate::commands::{run_detect_code, run_rules};
use crate::summary::{print_json_summary, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::DetectCode(args) => match run_detect_code(&args) {
            Ok(result) => {
                let printed = match args.summary_format {
                    SummaryFormatArg::Table => {
                        print_summary(&result);
                        Ok(())
                    }
                    SummaryFormatArg::Json => print_json_summary(&result),
                };
                match printed {
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                    Ok(()) if args.strict && result.summary.has_rejections() => 1,
                    Ok(()) => 0,
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Rules => match run_rules() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Logs go to stderr in color only when it is a terminal.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let verbosity = cli
        .verbosity
        .is_present()
        .then(|| cli.verbosity.tracing_level_filter());
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::from_levels(cli.log_level.map(LevelFilter::from), verbosity)
        .with_format(cli.log_format.into())
        .with_timestamps(cli.log_timestamps)
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone())
}
