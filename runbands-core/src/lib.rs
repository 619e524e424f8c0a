//! Core algorithms for runbands.
//!
//! This crate holds everything that is independent of the on-disk
//! experiment layout: run parsing, windowed reduction, cross-run
//! aggregation, the persisted summary format, the band comparison and the
//! terminal report. The runbands binary wires these up to a filesystem
//! configuration source.

pub mod aggregate;
pub mod compare;
pub mod reduce;
pub mod report;
pub mod sample;
pub mod summary;

// Re-export main types for convenience
pub use aggregate::{aggregate, BandSummary, SummaryRecord};
pub use compare::{compare, CompareError, Comparison, Thresholds, Verdict};
pub use reduce::{reduce_run, ReducedRun, WindowGrid, WindowedReducer};
pub use report::{ReportError, Reporter, TerminalReporter, VariantReport};
pub use sample::{parse_run, ParseError, Sample};
pub use summary::{parse_rows, render, BandLayout, BandRow, SummaryError};
