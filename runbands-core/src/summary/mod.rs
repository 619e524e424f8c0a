//! The persisted band-summary text format.
//!
//! A summary file holds one whitespace-separated row per surviving
//! window. Which columns a row carries depends on the configured band
//! layout; a single file never mixes layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::BandSummary;

/// Which symmetric bounds a summary file carries around the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandLayout {
    /// `time  mean-s  mean  mean+s`
    Narrow,
    /// `time  mean-2s  mean  mean+2s`
    Wide,
    /// `time  mean-2s  mean-s  mean  mean+s  mean+2s`
    Nested,
}

impl BandLayout {
    /// Total columns per row, including the time column.
    pub fn columns(&self) -> usize {
        match self {
            BandLayout::Narrow | BandLayout::Wide => 4,
            BandLayout::Nested => 6,
        }
    }

    /// Zero-based column of the outermost lower bound, the bound the
    /// comparator holds against the other side's mean.
    pub fn lower_column(&self) -> usize {
        1
    }

    /// Zero-based column of the mean.
    pub fn mean_column(&self) -> usize {
        match self {
            BandLayout::Narrow | BandLayout::Wide => 2,
            BandLayout::Nested => 3,
        }
    }

    /// Zero-based column of the outermost upper bound.
    pub fn upper_column(&self) -> usize {
        match self {
            BandLayout::Narrow | BandLayout::Wide => 3,
            BandLayout::Nested => 5,
        }
    }
}

impl fmt::Display for BandLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BandLayout::Narrow => "narrow",
            BandLayout::Wide => "wide",
            BandLayout::Nested => "nested",
        };
        f.write_str(name)
    }
}

impl FromStr for BandLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(BandLayout::Narrow),
            "wide" => Ok(BandLayout::Wide),
            "nested" => Ok(BandLayout::Nested),
            other => Err(format!(
                "unknown band layout {:?} (expected narrow, wide or nested)",
                other
            )),
        }
    }
}

/// One summary row narrowed to what the comparator consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRow {
    pub time: f64,
    /// The layout's outermost lower bound.
    pub lower: f64,
    pub mean: f64,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: {token:?} is not a number")]
    NotANumber { row: usize, token: String },
}

/// Render a summary as stats-file text in the given layout.
pub fn render(summary: &BandSummary, layout: BandLayout) -> String {
    let mut out = String::new();
    for record in &summary.records {
        let (t, m, s) = (record.time, record.mean, record.spread);
        let row = match layout {
            BandLayout::Narrow => format!("{} {} {} {}", t, m - s, m, m + s),
            BandLayout::Wide => {
                format!("{} {} {} {}", t, m - 2.0 * s, m, m + 2.0 * s)
            }
            BandLayout::Nested => format!(
                "{} {} {} {} {} {}",
                t,
                m - 2.0 * s,
                m - s,
                m,
                m + s,
                m + 2.0 * s
            ),
        };
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Parse stats-file text back into comparator rows.
///
/// A single leading header or label row is tolerated and skipped; every
/// remaining row must match the layout's column count exactly.
pub fn parse_rows(text: &str, layout: BandLayout) -> Result<Vec<BandRow>, SummaryError> {
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line, index + 1, layout) {
            Ok(row) => rows.push(row),
            Err(_) if index == 0 => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(rows)
}

fn parse_row(line: &str, row: usize, layout: BandLayout) -> Result<BandRow, SummaryError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != layout.columns() {
        return Err(SummaryError::ColumnCount {
            row,
            expected: layout.columns(),
            found: fields.len(),
        });
    }

    let mut values = Vec::with_capacity(fields.len());
    for token in &fields {
        let value: f64 = token.parse().map_err(|_| SummaryError::NotANumber {
            row,
            token: token.to_string(),
        })?;
        values.push(value);
    }

    Ok(BandRow {
        time: values[0],
        lower: values[layout.lower_column()],
        mean: values[layout.mean_column()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SummaryRecord;

    fn summary_of(records: &[(f64, f64, f64)]) -> BandSummary {
        BandSummary {
            records: records
                .iter()
                .map(|&(time, mean, spread)| SummaryRecord { time, mean, spread })
                .collect(),
        }
    }

    #[test]
    fn test_render_narrow() {
        let text = render(&summary_of(&[(0.0, 3.0, 1.0)]), BandLayout::Narrow);
        assert_eq!(text, "0 2 3 4\n");
    }

    #[test]
    fn test_render_wide() {
        let text = render(&summary_of(&[(0.0, 3.0, 1.0)]), BandLayout::Wide);
        assert_eq!(text, "0 1 3 5\n");
    }

    #[test]
    fn test_render_nested() {
        let text = render(&summary_of(&[(0.0, 3.0, 1.0)]), BandLayout::Nested);
        assert_eq!(text, "0 1 2 3 4 5\n");
    }

    #[test]
    fn test_rendered_text_parses_back() {
        let summary = summary_of(&[(0.0, 3.0, 1.0), (0.05, 4.5, 0.5)]);
        for layout in [BandLayout::Narrow, BandLayout::Wide, BandLayout::Nested] {
            let rows = parse_rows(&render(&summary, layout), layout).unwrap();

            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].mean, 3.0);
            assert_eq!(rows[1].mean, 4.5);
            match layout {
                BandLayout::Narrow => assert_eq!(rows[0].lower, 2.0),
                BandLayout::Wide | BandLayout::Nested => assert_eq!(rows[0].lower, 1.0),
            }
        }
    }

    #[test]
    fn test_leading_header_row_is_skipped() {
        let rows = parse_rows("time low mean high\n0 2 3 4\n", BandLayout::Narrow).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mean, 3.0);
    }

    #[test]
    fn test_column_count_mismatch_is_an_error() {
        let result = parse_rows("0 2 3 4\n0.05 2 3\n", BandLayout::Narrow);
        assert!(matches!(
            result,
            Err(SummaryError::ColumnCount {
                row: 2,
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_bad_number_past_the_first_row_is_an_error() {
        let result = parse_rows("0 2 3 4\n0.05 2 x 4\n", BandLayout::Narrow);
        match result {
            Err(SummaryError::NotANumber { row, token }) => {
                assert_eq!(row, 2);
                assert_eq!(token, "x");
            }
            other => panic!("expected NotANumber, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_round_trips_through_names() {
        for layout in [BandLayout::Narrow, BandLayout::Wide, BandLayout::Nested] {
            assert_eq!(layout.to_string().parse::<BandLayout>().unwrap(), layout);
        }
        assert!("triple".parse::<BandLayout>().is_err());
    }
}
