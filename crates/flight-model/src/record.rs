//! A single row read from a flight record file.

use std::collections::BTreeSet;

/// One input row: the headers it was declared under and its raw values.
///
/// Headers and values are positional. A row shorter than its header line has
/// headers without values; a row longer than its header line carries the
/// surplus values under empty header names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightRecord {
    headers: Vec<String>,
    values: Vec<String>,
    line: Option<u64>,
}

impl FlightRecord {
    /// Build a record from its declared headers and raw values.
    pub fn new(headers: Vec<String>, values: Vec<String>) -> Self {
        let mut headers = headers;
        if values.len() > headers.len() {
            headers.resize(values.len(), String::new());
        }
        Self {
            headers,
            values,
            line: None,
        }
    }

    /// Build a record from `(header, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values) = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .unzip();
        Self::new(headers, values)
    }

    /// Attach the 1-based source line the row was read from.
    #[must_use]
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    /// Value under the first header named `name`, if the row has one.
    pub fn field(&self, name: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|header| header == name)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Declared field-name set of this row.
    pub fn header_set(&self) -> BTreeSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Raw values in input order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn line(&self) -> Option<u64> {
        self.line
    }
}
