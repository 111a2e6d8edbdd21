//! Library components of the `admissions-etl` binary.

pub mod logging;
pub mod pipeline;
