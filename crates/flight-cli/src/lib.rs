//! CLI library components for flightcheck.

pub mod logging;
pub mod pipeline;
