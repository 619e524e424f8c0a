//! The batch pipeline between the configuration source and the reports.
//!
//! Each configuration is summarized independently: its runs are parsed,
//! reduced onto the window grid and aggregated, and the summary is
//! persisted through the source. Comparisons then re-read the persisted
//! summaries, so a tree summarized by an earlier invocation compares the
//! same way as a freshly summarized one.

use thiserror::Error;

use runbands_core::aggregate::{aggregate, BandSummary};
use runbands_core::compare::{compare, CompareError, Comparison, Thresholds};
use runbands_core::reduce::{reduce_run, WindowGrid};
use runbands_core::sample::{parse_run, ParseError};
use runbands_core::summary::{parse_rows, render, BandLayout, SummaryError};

use crate::source::{ConfigurationId, ConfigurationSource, SourceError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("run {run} of {variant}: {source}")]
    MalformedRun {
        variant: String,
        run: String,
        source: ParseError,
    },
    #[error("summary of {variant}: {source}")]
    MalformedSummary {
        variant: String,
        source: SummaryError,
    },
    #[error("comparing {variant} against {reference}: {source}")]
    Compare {
        variant: String,
        reference: String,
        source: CompareError,
    },
}

/// Reduce and aggregate one configuration's runs and persist its summary.
///
/// Returns the run count and the summary, or `None` for a configuration
/// with no run files at all, which leaves no summary file behind.
pub fn summarize<S: ConfigurationSource>(
    source: &S,
    grid: WindowGrid,
    layout: BandLayout,
    id: &ConfigurationId,
) -> Result<Option<(usize, BandSummary)>, PipelineError> {
    let runs = source.runs(id)?;
    if runs.is_empty() {
        return Ok(None);
    }

    let mut reduced = Vec::with_capacity(runs.len());
    for run in &runs {
        let samples = parse_run(&run.text).map_err(|source| PipelineError::MalformedRun {
            variant: id.rel_dir().display().to_string(),
            run: run.name.clone(),
            source,
        })?;
        reduced.push(reduce_run(grid, &samples));
    }

    let summary = aggregate(grid, &reduced);
    source.write_summary(id, &render(&summary, layout))?;
    Ok(Some((runs.len(), summary)))
}

/// Compare one variant's persisted summary against the reference's.
///
/// Either summary may be missing (the variant produced no runs, or the
/// reference has not been summarized yet); both cases skip the comparison
/// rather than fail.
pub fn compare_variant<S: ConfigurationSource>(
    source: &S,
    layout: BandLayout,
    thresholds: Thresholds,
    reference: &ConfigurationId,
    candidate: &ConfigurationId,
) -> Result<Option<Comparison>, PipelineError> {
    let reference_text = match source.read_summary(reference)? {
        Some(text) => text,
        None => return Ok(None),
    };
    let candidate_text = match source.read_summary(candidate)? {
        Some(text) => text,
        None => return Ok(None),
    };

    let reference_rows =
        parse_rows(&reference_text, layout).map_err(|source| PipelineError::MalformedSummary {
            variant: reference.rel_dir().display().to_string(),
            source,
        })?;
    let candidate_rows =
        parse_rows(&candidate_text, layout).map_err(|source| PipelineError::MalformedSummary {
            variant: candidate.rel_dir().display().to_string(),
            source,
        })?;

    compare(&reference_rows, &candidate_rows, thresholds)
        .map(Some)
        .map_err(|source| PipelineError::Compare {
            variant: candidate.rel_dir().display().to_string(),
            reference: reference.rel_dir().display().to_string(),
            source,
        })
}

/// Resolve the configured `<test>/<value>` reference name within an
/// instance.
pub fn reference_id(instance: &str, reference: &str) -> Option<ConfigurationId> {
    let (test, value) = reference.split_once('/')?;
    if test.is_empty() || value.is_empty() {
        return None;
    }
    Some(ConfigurationId::new(instance, test, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_id_splits_test_and_value() {
        let id = reference_id("seed-1", "no-redundancy/0").unwrap();

        assert_eq!(id.instance, "seed-1");
        assert_eq!(id.test, "no-redundancy");
        assert_eq!(id.value, "0");
    }

    #[test]
    fn test_reference_id_rejects_malformed_names() {
        assert!(reference_id("seed-1", "no-redundancy").is_none());
        assert!(reference_id("seed-1", "/0").is_none());
        assert!(reference_id("seed-1", "no-redundancy/").is_none());
    }
}
