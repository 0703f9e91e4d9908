//! Tax calculation modules.
//!
//! This module provides the slab tables, deduction aggregation and the
//! progressive engine that combines them, plus a regime comparison built on
//! top of the engine.

pub mod bracket_table;
pub mod common;
pub mod comparison;
pub mod deductions;
pub mod engine;

pub use bracket_table::{SlabRange, brackets_for, exemption_threshold, slab_ranges};
pub use comparison::RegimeComparison;
pub use deductions::{DeductionAggregator, DeductionBreakdown, aggregate};
pub use engine::{TaxEngine, compute};
