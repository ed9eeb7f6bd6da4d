//! CSV reading with a single header row.
//!
//! The csv parser skips empty lines. A blank line in a flight file is still a
//! row though, so the reader counts the line terminators skipped between two
//! records and yields an empty record for each of them.

use std::io::{Cursor, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use flight_model::FlightRecord;

use crate::error::{IngestError, Result};

/// Reads flight records from CSV input whose first row holds the headers.
pub struct FlightReader {
    reader: csv::Reader<Cursor<Vec<u8>>>,
    headers: Vec<String>,
    source_name: String,
}

impl FlightReader {
    /// Load a CSV file for reading.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_bytes(data, path.display().to_string())
    }

    /// Drain any reader; `source_name` identifies it in errors.
    pub fn from_reader<R: Read>(mut input: R, source_name: impl Into<String>) -> Result<Self> {
        let source_name = source_name.into();
        let mut data = Vec::new();
        if let Err(source) = input.read_to_end(&mut data) {
            return Err(IngestError::StreamRead {
                source_name,
                source,
            });
        }
        Self::from_bytes(data, source_name)
    }

    /// Parse CSV held in memory.
    pub fn from_bytes(data: Vec<u8>, source_name: impl Into<String>) -> Result<Self> {
        let source_name = source_name.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(data));

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| IngestError::CsvParse {
                source_name: source_name.clone(),
                source,
            })?
            .iter()
            .map(|header| header.trim_matches('\u{feff}').to_string())
            .collect();
        if headers.is_empty() {
            return Err(IngestError::EmptyCsv { source_name });
        }
        tracing::debug!(source = %source_name, headers = ?headers, "read header row");

        Ok(Self {
            reader,
            headers,
            source_name,
        })
    }

    /// Header row as declared in the input.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate the remaining rows in input order, blank lines included.
    pub fn records(&mut self) -> FlightRecords<'_> {
        FlightRecords {
            reader: &mut self.reader,
            headers: &self.headers,
            source_name: &self.source_name,
            row: StringRecord::new(),
            row_line: 0,
            row_ready: false,
            blank_rows: 0,
            blank_line: 0,
            done: false,
        }
    }
}

/// Iterator over the rows of a [`FlightReader`].
pub struct FlightRecords<'r> {
    reader: &'r mut csv::Reader<Cursor<Vec<u8>>>,
    headers: &'r [String],
    source_name: &'r str,
    row: StringRecord,
    row_line: u64,
    row_ready: bool,
    /// Blank lines still to yield before `row`.
    blank_rows: u64,
    blank_line: u64,
    done: bool,
}

impl FlightRecords<'_> {
    fn blank_record(&mut self) -> FlightRecord {
        let line = self.blank_line;
        self.blank_rows -= 1;
        self.blank_line += 1;
        FlightRecord::new(self.headers.to_vec(), Vec::new()).with_line(line)
    }

    fn row_record(&mut self) -> FlightRecord {
        self.row_ready = false;
        let values = self.row.iter().map(str::to_string).collect();
        FlightRecord::new(self.headers.to_vec(), values).with_line(self.row_line)
    }

    /// Read the next csv row and note the blank lines skipped before it.
    fn advance(&mut self) -> Result<()> {
        let gap = self.reader.position().clone();
        let has_row = self
            .reader
            .read_record(&mut self.row)
            .map_err(|source| IngestError::CsvParse {
                source_name: self.source_name.to_string(),
                source,
            })?;

        let data = self.reader.get_ref().get_ref();
        let start = usize::try_from(gap.byte()).unwrap_or(data.len());
        let (continues_crlf, blank_rows) = skipped_blank_lines(data, start);
        self.blank_rows = blank_rows;
        self.blank_line = gap.line() + u64::from(continues_crlf);
        self.row_line = self.blank_line + blank_rows;
        self.row_ready = has_row;
        self.done = !has_row;
        Ok(())
    }
}

impl Iterator for FlightRecords<'_> {
    type Item = Result<FlightRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.blank_rows > 0 {
                return Some(Ok(self.blank_record()));
            }
            if self.row_ready {
                return Some(Ok(self.row_record()));
            }
            if self.done {
                return None;
            }
            if let Err(error) = self.advance() {
                self.done = true;
                return Some(Err(error));
            }
        }
    }
}

/// Count the empty lines starting at byte `start`.
///
/// Also reports whether `start` sits between the `\r` and `\n` of the
/// previous row's terminator; that `\n` is not a blank line.
fn skipped_blank_lines(data: &[u8], start: usize) -> (bool, u64) {
    let mut prev = start.checked_sub(1).and_then(|idx| data.get(idx).copied());
    let continues_crlf = prev == Some(b'\r') && data.get(start) == Some(&b'\n');
    let mut count = 0u64;
    for &byte in data.get(start..).unwrap_or_default() {
        match byte {
            b'\n' if prev == Some(b'\r') => {}
            b'\n' | b'\r' => count += 1,
            _ => break,
        }
        prev = Some(byte);
    }
    (continues_crlf, count)
}
