//! Command-line interface for runbands.

use crate::config::Config;
use clap::Parser;
use runbands_core::summary::BandLayout;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "runbands")]
#[command(about = "Summarize repeated experiment runs into band plots and verdicts")]
#[command(version)]
pub struct Cli {
    /// Root directory of the experiment output hierarchy
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of time windows per run
    #[arg(long)]
    pub window_count: Option<usize>,

    /// Total time span covered by the windows, in seconds
    #[arg(long)]
    pub time_max: Option<f64>,

    /// Band layout for persisted summaries (narrow, wide or nested)
    #[arg(long)]
    pub bands: Option<BandLayout>,

    /// Reference variant, as <test>/<value>, within each instance
    #[arg(long)]
    pub reference: Option<String>,

    /// Skip writing the plot script
    #[arg(long)]
    pub no_plot: bool,

    /// Path to config file
    #[arg(long, default_value = ".runbands.toml")]
    pub config: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// Only non-None optional values will override the config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(output_dir) = &self.output_dir {
            config.experiment.output_dir = output_dir.clone();
        }

        if let Some(window_count) = self.window_count {
            config.windows.count = window_count;
        }

        if let Some(time_max) = self.time_max {
            config.windows.time_max = time_max;
        }

        if let Some(bands) = self.bands {
            config.bands.layout = bands;
        }

        if let Some(reference) = &self.reference {
            config.experiment.reference = reference.clone();
        }
    }
}
