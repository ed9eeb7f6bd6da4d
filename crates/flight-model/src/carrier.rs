//! Carrier code coding standards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coding standard a carrier code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CarrierCodeType {
    /// Two characters, optionally followed by a `*` wildcard.
    #[serde(rename = "IATA")]
    Iata,
    /// Three characters.
    #[serde(rename = "ICAO")]
    Icao,
    /// Matches neither standard.
    #[serde(rename = "")]
    Undefined,
}

impl CarrierCodeType {
    /// Label written to the `carrier_code_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iata => "IATA",
            Self::Icao => "ICAO",
            Self::Undefined => "",
        }
    }
}

impl fmt::Display for CarrierCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(CarrierCodeType::Iata.to_string(), "IATA");
        assert_eq!(CarrierCodeType::Icao.to_string(), "ICAO");
        assert!(CarrierCodeType::Undefined.as_str().is_empty());
    }
}
