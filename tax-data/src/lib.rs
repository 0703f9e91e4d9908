//! Batch input and output for the tax engine.
//!
//! [`loader`] reads calculator requests from CSV and [`report`] computes and
//! writes the results back out as CSV.

pub mod loader;
pub mod report;

pub use loader::{BatchEntry, CsvLoadError, TaxFormLoader};
pub use report::{BatchOutcome, ReportError, compute_batch, write_report};
