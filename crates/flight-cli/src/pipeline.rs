//! Record processing pipeline.
//!
//! Records flow strictly in input order:
//! 1. **Ingest**: read one row from the input file
//! 2. **Validate**: run the ordered checks and classify the carrier code
//! 3. **Route**: append the row to the accepted or the error sink
//!
//! Every row ends up in exactly one sink. Validation failures are recorded and
//! processing continues; only I/O failures abort the run.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::iter;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use flight_model::{CarrierCodeType, FlightRecord, accepted_headers, error_headers};
use flight_validate::{RowValidator, UniquenessTracker};

// ============================================================================
// Sinks
// ============================================================================

/// Destination for one output stream.
pub trait RecordSink {
    /// Write the header row.
    fn write_header(&mut self, headers: &[&str]) -> Result<()>;

    /// Write a record followed by its annotation column.
    fn write_record(&mut self, record: &FlightRecord, annotation: &str) -> Result<()>;

    /// Flush buffered rows.
    fn finish(&mut self) -> Result<()>;

    /// Number of records written, excluding the header row.
    fn rows_written(&self) -> usize;
}

/// Writes rows as CSV.
///
/// Rows keep their original width, so records with surplus values are
/// written in full.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("create output: {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new().flexible(true).from_writer(writer),
            rows: 0,
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow!("flush csv output: {}", err.error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_header(&mut self, headers: &[&str]) -> Result<()> {
        self.writer
            .write_record(headers)
            .context("write header row")
    }

    fn write_record(&mut self, record: &FlightRecord, annotation: &str) -> Result<()> {
        let fields = record
            .values()
            .iter()
            .map(String::as_str)
            .chain(iter::once(annotation));
        self.writer.write_record(fields).context("write record")?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("flush csv output")
    }

    fn rows_written(&self) -> usize {
        self.rows
    }
}

/// Discards rows and only counts them.
#[derive(Debug, Default)]
pub struct NullSink {
    rows: usize,
}

impl RecordSink for NullSink {
    fn write_header(&mut self, _headers: &[&str]) -> Result<()> {
        Ok(())
    }

    fn write_record(&mut self, _record: &FlightRecord, _annotation: &str) -> Result<()> {
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    fn rows_written(&self) -> usize {
        self.rows
    }
}

// ============================================================================
// Processing
// ============================================================================

/// Counts collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    /// Records read from the input.
    pub total: usize,
    /// Records written to the accepted stream.
    pub accepted: usize,
    /// Records written to the error stream.
    pub rejected: usize,
    pub iata: usize,
    pub icao: usize,
    pub undefined: usize,
    /// Rejections keyed by failure kind.
    pub failures: BTreeMap<&'static str, usize>,
}

impl ProcessSummary {
    pub fn has_rejections(&self) -> bool {
        self.rejected > 0
    }

    fn record_accepted(&mut self, code_type: CarrierCodeType) {
        self.total += 1;
        self.accepted += 1;
        match code_type {
            CarrierCodeType::Iata => self.iata += 1,
            CarrierCodeType::Icao => self.icao += 1,
            CarrierCodeType::Undefined => self.undefined += 1,
        }
    }

    fn record_rejected(&mut self, kind: &'static str) {
        self.total += 1;
        self.rejected += 1;
        *self.failures.entry(kind).or_insert(0) += 1;
    }
}

/// Validate every record and route it to the accepted or error sink.
///
/// Header rows are written before the first record and both sinks are
/// flushed at the end.
///
/// # Errors
///
/// Returns an error when a record cannot be read or a sink cannot be written.
pub fn process_records<I>(
    records: I,
    validator: &RowValidator,
    tracker: &mut UniquenessTracker,
    accepted: &mut dyn RecordSink,
    errors: &mut dyn RecordSink,
) -> Result<ProcessSummary>
where
    I: IntoIterator<Item = flight_ingest::Result<FlightRecord>>,
{
    accepted.write_header(&accepted_headers())?;
    errors.write_header(&error_headers())?;

    let mut summary = ProcessSummary::default();
    for record in records {
        let record = record.context("read record")?;
        match validator.validate(&record, tracker) {
            Ok(code_type) => {
                accepted.write_record(&record, code_type.as_str())?;
                summary.record_accepted(code_type);
            }
            Err(failure) => {
                debug!(
                    line = record.line(),
                    kind = failure.kind(),
                    reason = %failure,
                    "record rejected"
                );
                errors.write_record(&record, &failure.to_string())?;
                summary.record_rejected(failure.kind());
            }
        }
    }

    accepted.finish()?;
    errors.finish()?;

    info!(
        total = summary.total,
        accepted = summary.accepted,
        rejected = summary.rejected,
        distinct_codes = tracker.len(),
        "records processed"
    );
    Ok(summary)
}
