//! Ordered row validation.

use std::collections::BTreeSet;

use flight_model::{CarrierCodeType, FLIGHT_HEADERS, FlightRecord};
use tracing::trace;

use crate::dates::is_valid_date;
use crate::failure::ValidationFailure;
use crate::patterns::{classify, is_valid_carrier_code};
use crate::tracker::UniquenessTracker;

/// Validates flight records and classifies their carrier codes.
#[derive(Debug, Clone)]
pub struct RowValidator {
    expected_headers: BTreeSet<&'static str>,
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowValidator {
    pub fn new() -> Self {
        Self {
            expected_headers: FLIGHT_HEADERS.into_iter().collect(),
        }
    }

    /// Validate one record against the codes accepted so far.
    ///
    /// Checks run in a fixed order and the first failure is returned. The
    /// tracker is only updated when every check passes.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] of the first check the record fails.
    pub fn validate(
        &self,
        record: &FlightRecord,
        tracker: &mut UniquenessTracker,
    ) -> Result<CarrierCodeType, ValidationFailure> {
        self.check_headers(record)?;
        check_flight_date(record)?;
        check_required_fields(record)?;
        let code = check_carrier_code(record)?;

        if tracker.is_duplicate(code) {
            return Err(ValidationFailure::DuplicateCarrierCode {
                code: code.to_string(),
            });
        }
        tracker.insert(code);

        let code_type = classify(code);
        trace!(line = record.line(), carrier_code = code, code_type = %code_type, "record accepted");
        Ok(code_type)
    }

    fn check_headers(&self, record: &FlightRecord) -> Result<(), ValidationFailure> {
        if record.header_set() == self.expected_headers {
            return Ok(());
        }
        Err(ValidationFailure::MalformedHeaders {
            found: record.headers().to_vec(),
        })
    }
}

fn check_flight_date(record: &FlightRecord) -> Result<(), ValidationFailure> {
    let value = record.field("flight_date").unwrap_or_default();
    if is_valid_date(value) {
        Ok(())
    } else {
        Err(ValidationFailure::InvalidDate {
            value: value.to_string(),
        })
    }
}

/// Missing and empty fields are treated alike.
fn check_required_fields(record: &FlightRecord) -> Result<(), ValidationFailure> {
    match FLIGHT_HEADERS
        .into_iter()
        .find(|field| record.field(field).unwrap_or_default().is_empty())
    {
        Some(field) => Err(ValidationFailure::MissingRequiredField { field }),
        None => Ok(()),
    }
}

fn check_carrier_code(record: &FlightRecord) -> Result<&str, ValidationFailure> {
    let code = record.field("carrier_code").unwrap_or_default();
    if is_valid_carrier_code(code) {
        Ok(code)
    } else {
        Err(ValidationFailure::InvalidCarrierCodeFormat {
            code: code.to_string(),
        })
    }
}
