//! Cross-run aggregation of reduced values into per-window band records.

use crate::reduce::{ReducedRun, WindowGrid};

/// Mean and spread of every run's reduced value for one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRecord {
    /// Start time of the window.
    pub time: f64,
    pub mean: f64,
    /// Population standard deviation across runs; zero for a single
    /// contributing run.
    pub spread: f64,
}

/// Per-window aggregate over every run of one configuration.
///
/// Windows no run reached are omitted, so the records are ordered but not
/// necessarily contiguous in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandSummary {
    pub records: Vec<SummaryRecord>,
}

/// Aggregate the reduced runs of one configuration.
pub fn aggregate(grid: WindowGrid, runs: &[ReducedRun]) -> BandSummary {
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); grid.count()];
    for run in runs {
        for &(index, value) in run.values() {
            buckets[index].push(value);
        }
    }

    let mut records = Vec::new();
    for (index, bucket) in buckets.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let n = bucket.len() as f64;
        let mean = bucket.iter().sum::<f64>() / n;
        let mean_of_squares = bucket.iter().map(|v| v * v).sum::<f64>() / n;
        // Cancellation can push the estimate slightly negative; clamp.
        let variance = (mean_of_squares - mean * mean).max(0.0);
        records.push(SummaryRecord {
            time: grid.start(index),
            mean,
            spread: variance.sqrt(),
        });
    }
    BandSummary { records }
}
