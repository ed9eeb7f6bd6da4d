//! Flight record validation.
//!
//! Every record passes through an ordered sequence of checks; the first
//! failing check decides the outcome. Records that pass are classified by
//! their carrier code and their code is remembered in a [`UniquenessTracker`]
//! so later records cannot reuse it.
//!
//! # Example
//!
//! ```
//! use flight_model::{CarrierCodeType, FlightRecord};
//! use flight_validate::{RowValidator, UniquenessTracker, ValidationFailure};
//!
//! let validator = RowValidator::new();
//! let mut tracker = UniquenessTracker::new();
//! let record = FlightRecord::from_pairs([
//!     ("id", "1"),
//!     ("carrier_code", "AB"),
//!     ("flight_number", "100"),
//!     ("flight_date", "2024-01-01"),
//! ]);
//!
//! assert_eq!(validator.validate(&record, &mut tracker), Ok(CarrierCodeType::Iata));
//! assert!(matches!(
//!     validator.validate(&record, &mut tracker),
//!     Err(ValidationFailure::DuplicateCarrierCode { .. })
//! ));
//! ```

mod dates;
mod failure;
mod patterns;
mod tracker;
mod validator;

pub use dates::{is_valid_date, parse_flight_date};
pub use failure::{ValidationCheck, ValidationFailure};
pub use patterns::{classify, is_iata_code, is_icao_code, is_valid_carrier_code};
pub use tracker::{UniquenessTracker, WILDCARD_SUFFIX, is_wildcard};
pub use validator::RowValidator;
