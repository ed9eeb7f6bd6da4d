use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tracing::{info, info_span, warn};

use flight_cli::pipeline::{CsvSink, NullSink, ProcessSummary, RecordSink, process_records};
use flight_ingest::FlightReader;
use flight_validate::{RowValidator, UniquenessTracker, ValidationCheck};

use crate::cli::DetectCodeArgs;
use crate::summary::apply_table_style;

#[derive(Debug, Serialize)]
pub struct DetectResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub errors_path: PathBuf,
    pub dry_run: bool,
    pub summary: ProcessSummary,
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Failure", "Check"]);
    apply_table_style(&mut table);
    for (position, check) in ValidationCheck::ALL.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            check.name().to_string(),
            check.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_detect_code(args: &DetectCodeArgs) -> Result<DetectResult> {
    let span = info_span!("detect_code", input = %args.input_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = FlightReader::from_path(&args.input_path)
        .with_context(|| format!("open input: {}", args.input_path.display()))?;

    let (mut accepted, mut errors): (Box<dyn RecordSink>, Box<dyn RecordSink>) = if args.dry_run
    {
        (Box::new(NullSink::default()), Box::new(NullSink::default()))
    } else {
        (
            Box::new(CsvSink::create(&args.output_path)?),
            Box::new(CsvSink::create(&args.errors_path)?),
        )
    };

    let validator = RowValidator::new();
    let mut tracker = UniquenessTracker::new();
    let summary = process_records(
        reader.records(),
        &validator,
        &mut tracker,
        accepted.as_mut(),
        errors.as_mut(),
    )?;

    info!(
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "detect-code complete"
    );
    if summary.has_rejections() {
        warn!(rejected = summary.rejected, "some records were rejected");
    }

    Ok(DetectResult {
        input_path: args.input_path.clone(),
        output_path: args.output_path.clone(),
        errors_path: args.errors_path.clone(),
        dry_run: args.dry_run,
        summary,
    })
}
