//! Carrier code shapes.

use std::sync::LazyLock;

use flight_model::CarrierCodeType;
use regex::Regex;

/// Two word characters with an optional trailing wildcard.
static IATA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{2}\*?$").expect("Invalid IATA regex"));

/// Three word characters.
static ICAO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3}$").expect("Invalid ICAO regex"));

pub fn is_iata_code(code: &str) -> bool {
    IATA_REGEX.is_match(code)
}

pub fn is_icao_code(code: &str) -> bool {
    ICAO_REGEX.is_match(code)
}

/// Returns true if the code has either accepted shape.
pub fn is_valid_carrier_code(code: &str) -> bool {
    is_iata_code(code) || is_icao_code(code)
}

/// Classify a carrier code by shape, IATA first.
pub fn classify(code: &str) -> CarrierCodeType {
    if is_iata_code(code) {
        CarrierCodeType::Iata
    } else if is_icao_code(code) {
        CarrierCodeType::Icao
    } else {
        CarrierCodeType::Undefined
    }
}
