//! runbands: band summaries and verdicts for repeated experiment runs
//!
//! This library wires the core windowing, aggregation and comparison
//! algorithms up to an on-disk experiment tree and the report surfaces
//! (stats files, gnuplot script, terminal table).

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod plot;
pub mod source;

// Re-export core types for convenience
pub use runbands_core::aggregate::{aggregate, BandSummary, SummaryRecord};
pub use runbands_core::compare::{compare, Comparison, Thresholds, Verdict};
pub use runbands_core::reduce::{reduce_run, ReducedRun, WindowGrid, WindowedReducer};
pub use runbands_core::report::{ReportError, Reporter, TerminalReporter, VariantReport};
pub use runbands_core::sample::{parse_run, Sample};
pub use runbands_core::summary::BandLayout;

// Re-export main types from this crate
pub use cli::Cli;
pub use config::Config;
pub use pipeline::{compare_variant, reference_id, summarize, PipelineError};
pub use plot::{render_script, PlotBlock, PlotSeries};
pub use source::{ConfigurationId, ConfigurationSource, FsSource, RunFile, SourceError};
