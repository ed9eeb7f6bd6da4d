//! Fixed column names for flight record files.

/// Columns every flight record file must declare, in canonical order.
pub const FLIGHT_HEADERS: [&str; 4] = ["id", "carrier_code", "flight_number", "flight_date"];

/// Column appended to accepted records.
pub const CARRIER_CODE_TYPE_COLUMN: &str = "carrier_code_type";

/// Column appended to rejected records.
pub const ERROR_COLUMN: &str = "error";

/// Header row of the accepted output stream.
pub fn accepted_headers() -> Vec<&'static str> {
    with_trailing(CARRIER_CODE_TYPE_COLUMN)
}

/// Header row of the error output stream.
pub fn error_headers() -> Vec<&'static str> {
    with_trailing(ERROR_COLUMN)
}

fn with_trailing(column: &'static str) -> Vec<&'static str> {
    let mut headers = FLIGHT_HEADERS.to_vec();
    headers.push(column);
    headers
}
