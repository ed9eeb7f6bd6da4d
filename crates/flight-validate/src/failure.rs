//! Validation failure types.
//!
//! Each variant carries the offending value so the rendered reason can be
//! written straight into the error stream.

use flight_model::FLIGHT_HEADERS;
use thiserror::Error;

/// Why a flight record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The row does not declare exactly the fixed flight headers.
    #[error("malformed headers: expected [{}], found [{}]", FLIGHT_HEADERS.join(", "), .found.join(", "))]
    MalformedHeaders { found: Vec<String> },

    /// `flight_date` is not a real calendar date.
    #[error("invalid flight_date '{value}'")]
    InvalidDate { value: String },

    /// A required field is absent or empty.
    #[error("required field '{field}' is missing")]
    MissingRequiredField { field: &'static str },

    /// `carrier_code` matches neither the IATA nor the ICAO shape.
    #[error("invalid carrier_code format '{code}'")]
    InvalidCarrierCodeFormat { code: String },

    /// `carrier_code` was already accepted on an earlier record.
    #[error("carrier_code '{code}' is not unique")]
    DuplicateCarrierCode { code: String },
}

impl ValidationFailure {
    /// Stable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        self.check().name()
    }

    /// The check that produced this failure.
    pub fn check(&self) -> ValidationCheck {
        match self {
            Self::MalformedHeaders { .. } => ValidationCheck::HeaderShape,
            Self::InvalidDate { .. } => ValidationCheck::FlightDate,
            Self::MissingRequiredField { .. } => ValidationCheck::RequiredFields,
            Self::InvalidCarrierCodeFormat { .. } => ValidationCheck::CarrierCodeFormat,
            Self::DuplicateCarrierCode { .. } => ValidationCheck::CarrierCodeUniqueness,
        }
    }
}

/// Checks applied to every record, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidationCheck {
    HeaderShape,
    FlightDate,
    RequiredFields,
    CarrierCodeFormat,
    CarrierCodeUniqueness,
}

impl ValidationCheck {
    /// All checks in the order the validator runs them.
    pub const ALL: [ValidationCheck; 5] = [
        Self::HeaderShape,
        Self::FlightDate,
        Self::RequiredFields,
        Self::CarrierCodeFormat,
        Self::CarrierCodeUniqueness,
    ];

    /// Name of the failure this check produces.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HeaderShape => "MalformedHeaders",
            Self::FlightDate => "InvalidDate",
            Self::RequiredFields => "MissingRequiredField",
            Self::CarrierCodeFormat => "InvalidCarrierCodeFormat",
            Self::CarrierCodeUniqueness => "DuplicateCarrierCode",
        }
    }

    /// One-line summary shown by `flightcheck rules`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::HeaderShape => {
                "Row declares exactly id, carrier_code, flight_number, flight_date"
            }
            Self::FlightDate => "flight_date parses as a real calendar date",
            Self::RequiredFields => "Every field is present and non-empty",
            Self::CarrierCodeFormat => {
                "carrier_code is IATA (2 chars, optional '*') or ICAO (3 chars)"
            }
            Self::CarrierCodeUniqueness => {
                "carrier_code not seen before, unless it ends with '*'"
            }
        }
    }
}
