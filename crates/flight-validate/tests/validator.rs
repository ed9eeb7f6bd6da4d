//! Integration tests for record validation and classification.

use flight_model::{CarrierCodeType, FlightRecord};
use flight_validate::{RowValidator, UniquenessTracker, ValidationFailure};
use proptest::prelude::*;

fn flight(id: &str, carrier_code: &str, flight_number: &str, flight_date: &str) -> FlightRecord {
    FlightRecord::from_pairs([
        ("id", id),
        ("carrier_code", carrier_code),
        ("flight_number", flight_number),
        ("flight_date", flight_date),
    ])
}

fn validate(
    record: &FlightRecord,
    tracker: &mut UniquenessTracker,
) -> Result<CarrierCodeType, ValidationFailure> {
    RowValidator::new().validate(record, tracker)
}

#[test]
fn test_accepts_new_iata_code() {
    let mut tracker = UniquenessTracker::new();
    let result = validate(&flight("1", "AB", "100", "2024-01-01"), &mut tracker);
    assert_eq!(result, Ok(CarrierCodeType::Iata));
    assert!(tracker.contains("AB"));
}

#[test]
fn test_rejects_reused_code() {
    let mut tracker = UniquenessTracker::new();
    validate(&flight("1", "AB", "100", "2024-01-01"), &mut tracker).unwrap();
    let result = validate(&flight("2", "AB", "200", "2024-01-02"), &mut tracker);
    assert_eq!(
        result,
        Err(ValidationFailure::DuplicateCarrierCode {
            code: "AB".to_string()
        })
    );
}

#[test]
fn test_wildcard_code_accepted_repeatedly() {
    let mut tracker = UniquenessTracker::new();
    for id in ["1", "2", "3"] {
        let result = validate(&flight(id, "AB*", "100", "2024-01-01"), &mut tracker);
        assert_eq!(result, Ok(CarrierCodeType::Iata));
    }
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_wildcard_does_not_reserve_plain_code() {
    let mut tracker = UniquenessTracker::new();
    validate(&flight("1", "AB*", "100", "2024-01-01"), &mut tracker).unwrap();
    assert_eq!(
        validate(&flight("2", "AB", "100", "2024-01-01"), &mut tracker),
        Ok(CarrierCodeType::Iata)
    );
}

#[test]
fn test_rejects_invalid_date() {
    let mut tracker = UniquenessTracker::new();
    let result = validate(&flight("1", "AB", "100", "not-a-date"), &mut tracker);
    assert!(matches!(result, Err(ValidationFailure::InvalidDate { .. })));
}

#[test]
fn test_rejects_empty_flight_number() {
    let mut tracker = UniquenessTracker::new();
    let result = validate(&flight("1", "AB", "", "2024-01-01"), &mut tracker);
    assert_eq!(
        result,
        Err(ValidationFailure::MissingRequiredField {
            field: "flight_number"
        })
    );
}

#[test]
fn test_rejects_one_character_code() {
    let mut tracker = UniquenessTracker::new();
    let result = validate(&flight("1", "A", "100", "2024-01-01"), &mut tracker);
    assert!(matches!(
        result,
        Err(ValidationFailure::InvalidCarrierCodeFormat { .. })
    ));
    assert!(tracker.is_empty());
}

#[test]
fn test_icao_code_classified() {
    let mut tracker = UniquenessTracker::new();
    let result = validate(&flight("1", "ABC", "100", "2024-01-01"), &mut tracker);
    assert_eq!(result, Ok(CarrierCodeType::Icao));
}

#[test]
fn test_malformed_headers_win_over_bad_date() {
    let record = FlightRecord::from_pairs([
        ("id", "1"),
        ("carrier", "AB"),
        ("flight_number", "100"),
        ("flight_date", "not-a-date"),
    ]);
    let mut tracker = UniquenessTracker::new();
    let result = validate(&record, &mut tracker);
    assert!(matches!(
        result,
        Err(ValidationFailure::MalformedHeaders { .. })
    ));
}

#[test]
fn test_missing_and_extra_headers_rejected() {
    let mut tracker = UniquenessTracker::new();
    let missing = FlightRecord::from_pairs([
        ("id", "1"),
        ("carrier_code", "AB"),
        ("flight_date", "2024-01-01"),
    ]);
    let extra = FlightRecord::new(
        ["id", "carrier_code", "flight_number", "flight_date"]
            .map(String::from)
            .to_vec(),
        ["1", "AB", "100", "2024-01-01", "surplus"]
            .map(String::from)
            .to_vec(),
    );
    for record in [missing, extra] {
        assert!(matches!(
            validate(&record, &mut tracker),
            Err(ValidationFailure::MalformedHeaders { .. })
        ));
    }
    assert!(tracker.is_empty());
}

#[test]
fn test_rejected_first_occurrence_does_not_reserve_code() {
    let mut tracker = UniquenessTracker::new();
    let first = validate(&flight("1", "AB", "", "2024-01-01"), &mut tracker);
    assert!(first.is_err());
    let second = validate(&flight("2", "AB", "100", "2024-01-01"), &mut tracker);
    assert_eq!(second, Ok(CarrierCodeType::Iata));
}

#[test]
fn test_failure_messages() {
    let mut tracker = UniquenessTracker::new();
    let header_err = validate(&FlightRecord::from_pairs([("id", "1")]), &mut tracker).unwrap_err();
    insta::assert_snapshot!(
        header_err,
        @"malformed headers: expected [id, carrier_code, flight_number, flight_date], found [id]"
    );
    let date_err = validate(&flight("1", "AB", "100", "2024-02-30"), &mut tracker).unwrap_err();
    insta::assert_snapshot!(date_err, @"invalid flight_date '2024-02-30'");
    let code_err = validate(&flight("1", "ABCD", "100", "2024-02-01"), &mut tracker).unwrap_err();
    insta::assert_snapshot!(code_err, @"invalid carrier_code format 'ABCD'");
    assert_eq!(code_err.kind(), "InvalidCarrierCodeFormat");
}

proptest! {
    #[test]
    fn prop_two_char_codes_are_iata(code in "[A-Za-z0-9_]{2}\\*?") {
        let mut tracker = UniquenessTracker::new();
        let result = validate(&flight("1", &code, "100", "2024-01-01"), &mut tracker);
        prop_assert_eq!(result, Ok(CarrierCodeType::Iata));
        prop_assert!(tracker.contains(&code));
    }

    #[test]
    fn prop_three_char_codes_are_icao(code in "[A-Za-z0-9_]{3}") {
        let mut tracker = UniquenessTracker::new();
        let result = validate(&flight("1", &code, "100", "2024-01-01"), &mut tracker);
        prop_assert_eq!(result, Ok(CarrierCodeType::Icao));
    }

    #[test]
    fn prop_second_plain_occurrence_is_duplicate(code in "[A-Za-z0-9_]{2,3}") {
        let mut tracker = UniquenessTracker::new();
        prop_assert!(validate(&flight("1", &code, "100", "2024-01-01"), &mut tracker).is_ok());
        let second = validate(&flight("2", &code, "101", "2024-01-02"), &mut tracker);
        let is_duplicate = matches!(second, Err(ValidationFailure::DuplicateCarrierCode { .. }));
        prop_assert!(is_duplicate);
    }

    #[test]
    fn prop_long_codes_rejected(code in "[A-Za-z0-9_]{4,8}") {
        let mut tracker = UniquenessTracker::new();
        let result = validate(&flight("1", &code, "100", "2024-01-01"), &mut tracker);
        let is_format = matches!(result, Err(ValidationFailure::InvalidCarrierCodeFormat { .. }));
        prop_assert!(is_format);
        prop_assert!(tracker.is_empty());
    }
}
