//! Flight record ingestion.
//!
//! Reads CSV files whose first row names the columns and turns every
//! following row into a [`FlightRecord`](flight_model::FlightRecord). Rows are
//! not validated here; ragged rows and blank lines are kept as records so the
//! validator can reject them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use flight_ingest::FlightReader;
//!
//! let mut reader = FlightReader::from_path(Path::new("flights.csv"))?;
//! for record in reader.records() {
//!     let record = record?;
//!     println!("{:?}", record.field("carrier_code"));
//! }
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{FlightReader, FlightRecords};
