//! Gnuplot script emission.
//!
//! The script is consumed by gnuplot directly; the directive names and
//! the 1-based column indices are part of the surface and must stay
//! exactly as the summary layout defines them.

use std::path::PathBuf;

use runbands_core::summary::BandLayout;

/// One plotted series: a summary file and its legend label.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub label: String,
    pub stats_path: PathBuf,
}

/// One `plot` command: the reference band plus every variant of one test
/// within one instance.
#[derive(Debug, Clone)]
pub struct PlotBlock {
    pub title: String,
    pub reference: PlotSeries,
    pub variants: Vec<PlotSeries>,
}

/// Render the full script for the configured band layout.
pub fn render_script(blocks: &[PlotBlock], layout: BandLayout) -> String {
    // gnuplot columns are 1-based.
    let lower = layout.lower_column() + 1;
    let mean = layout.mean_column() + 1;
    let upper = layout.upper_column() + 1;

    let mut script = String::new();
    script.push_str("set key outside\n");
    script.push_str("set style fill transparent solid 0.2 noborder\n");

    for block in blocks {
        script.push('\n');
        script.push_str(&format!("set title \"{}\"\n", block.title));

        let mut entries = Vec::new();
        for (index, series) in std::iter::once(&block.reference)
            .chain(block.variants.iter())
            .enumerate()
        {
            let color = index + 1;
            let path = series.stats_path.display();
            entries.push(format!(
                "    \"{}\" using 1:{}:{} with filledcurves lc {} notitle",
                path, lower, upper, color
            ));
            entries.push(format!(
                "    \"{}\" using 1:{} with lines lc {} title \"{}\"",
                path, mean, color, series.label
            ));
        }
        script.push_str("plot \\\n");
        script.push_str(&entries.join(", \\\n"));
        script.push('\n');
        script.push_str("pause -1\n");
    }
    script
}
