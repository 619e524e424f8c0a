//! Pairwise comparison of two band summaries.
//!
//! A candidate's summary is held against the reference's row by row:
//! whenever one side's pessimistic bound clears the other side's mean,
//! the excess is accumulated. The verdict is a fixed-threshold heuristic,
//! not a significance test.

use thiserror::Error;

use crate::summary::BandRow;

/// Net advantage a side must accumulate for a clear verdict.
pub const CLEAR_MARGIN: f64 = 15.0;
/// Largest opposing advantage a clear verdict may coexist with.
pub const NOISE_FLOOR: f64 = 1.0;

/// Comparison thresholds. The defaults are empirical tunables carried
/// over from the experiments this tool grew out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub clear_margin: f64,
    pub noise_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            clear_margin: CLEAR_MARGIN,
            noise_floor: NOISE_FLOOR,
        }
    }
}

/// How the candidate fared against the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Better,
    Worse,
    Inconclusive,
}

/// Accumulated comparison of one candidate against the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Total excess of the reference's lower bound over the candidate's
    /// mean: how far the candidate regressed.
    pub net_gain: f64,
    /// Total excess of the candidate's lower bound over the reference's
    /// mean: how far the candidate improved.
    pub net_loss: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("summaries are misaligned: reference has {reference} rows, candidate has {candidate}")]
    Misaligned { reference: usize, candidate: usize },
}

/// Compare two row-aligned summaries.
///
/// The sequences must pair up window by window; differing lengths are an
/// error rather than a silently truncated comparison.
pub fn compare(
    reference: &[BandRow],
    candidate: &[BandRow],
    thresholds: Thresholds,
) -> Result<Comparison, CompareError> {
    if reference.len() != candidate.len() {
        return Err(CompareError::Misaligned {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }

    let mut net_gain = 0.0;
    let mut net_loss = 0.0;
    for (reference, candidate) in reference.iter().zip(candidate) {
        if reference.lower > candidate.mean {
            net_gain += reference.lower - candidate.mean;
        }
        if candidate.lower > reference.mean {
            net_loss += candidate.lower - reference.mean;
        }
    }

    let verdict = if net_gain > thresholds.clear_margin && net_loss < thresholds.noise_floor {
        Verdict::Worse
    } else if net_loss > thresholds.clear_margin && net_gain < thresholds.noise_floor {
        Verdict::Better
    } else {
        Verdict::Inconclusive
    };

    Ok(Comparison {
        net_gain,
        net_loss,
        verdict,
    })
}
