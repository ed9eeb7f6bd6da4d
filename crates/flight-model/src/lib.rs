pub mod carrier;
pub mod headers;
pub mod record;

pub use carrier::CarrierCodeType;
pub use headers::{
    CARRIER_CODE_TYPE_COLUMN, ERROR_COLUMN, FLIGHT_HEADERS, accepted_headers, error_headers,
};
pub use record::FlightRecord;
