use thiserror::Error;

use crate::compare::Comparison;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One variant's outcome against its instance's reference, ready for
/// presentation. `comparison` is `None` when either side had no summary
/// and the comparison was skipped.
#[derive(Debug, Clone)]
pub struct VariantReport {
    pub instance: String,
    pub label: String,
    pub comparison: Option<Comparison>,
}

pub trait Reporter: Send + Sync {
    fn report(&self, results: &[VariantReport]) -> Result<(), ReportError>;
}

mod terminal;
pub use terminal::TerminalReporter;
