//! Configuration loading for runbands.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use runbands_core::compare::{Thresholds, CLEAR_MARGIN, NOISE_FLOOR};
use runbands_core::reduce::WindowGrid;
use runbands_core::summary::BandLayout;

/// Top-level configuration for runbands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the fixed time grid runs are binned into.
    pub windows: WindowsConfig,
    /// Settings for the persisted summary bands.
    pub bands: BandsConfig,
    /// Settings for the reference comparison.
    pub comparison: ComparisonConfig,
    /// Where the experiment tree lives and which variant anchors it.
    pub experiment: ExperimentConfig,
}

/// Configuration for the time grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Number of windows.
    pub count: usize,
    /// Total time span covered, in seconds. The window width is
    /// `time_max / count`.
    pub time_max: f64,
}

/// Configuration for summary persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BandsConfig {
    /// Column layout of persisted summaries (narrow, wide or nested).
    pub layout: BandLayout,
}

/// Configuration for the verdict thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Net advantage required for a clear verdict.
    pub clear_margin: f64,
    /// Largest opposing advantage a clear verdict may coexist with.
    pub noise_floor: f64,
}

/// Configuration for the experiment tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Root of the `<instance>/<test>/<value>` hierarchy.
    pub output_dir: PathBuf,
    /// `<test>/<value>` of the reference variant within each instance.
    pub reference: String,
    /// Path of the gnuplot script to write.
    pub plot_script: PathBuf,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            count: 20,
            time_max: 1.0,
        }
    }
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            layout: BandLayout::Wide,
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            clear_margin: CLEAR_MARGIN,
            noise_floor: NOISE_FLOOR,
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            reference: "no-redundancy/0".to_string(),
            plot_script: PathBuf::from("plot.gnu"),
        }
    }
}

impl WindowsConfig {
    /// The configured grid.
    pub fn grid(&self) -> WindowGrid {
        WindowGrid::new(self.count, self.time_max / self.count as f64)
    }
}

impl ComparisonConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            clear_margin: self.clear_margin,
            noise_floor: self.noise_floor,
        }
    }
}

/// Default configuration file name.
const DEFAULT_CONFIG_FILE: &str = ".runbands.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default file (`.runbands.toml`) or use
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be
    /// parsed.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try the default
    /// location.
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.windows.count, 20);
        assert_eq!(config.windows.time_max, 1.0);
        assert_eq!(config.bands.layout, BandLayout::Wide);
        assert_eq!(config.comparison.clear_margin, 15.0);
        assert_eq!(config.comparison.noise_floor, 1.0);
        assert_eq!(config.experiment.output_dir, PathBuf::from("output"));
        assert_eq!(config.experiment.reference, "no-redundancy/0");
        assert_eq!(config.experiment.plot_script, PathBuf::from("plot.gnu"));
    }

    #[test]
    fn test_default_grid_step() {
        let grid = Config::default().windows.grid();

        assert_eq!(grid.count(), 20);
        assert!((grid.step() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[windows]
count = 100

[bands]
layout = "nested"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();

        // Overridden values
        assert_eq!(config.windows.count, 100);
        assert_eq!(config.bands.layout, BandLayout::Nested);

        // Default values
        assert_eq!(config.windows.time_max, 1.0);
        assert_eq!(config.comparison.clear_margin, 15.0);
        assert_eq!(config.experiment.reference, "no-redundancy/0");
    }

    #[test]
    fn test_load_full_config() {
        let toml_content = r#"
[windows]
count = 50
time_max = 2.0

[bands]
layout = "narrow"

[comparison]
clear_margin = 10.0
noise_floor = 0.5

[experiment]
output_dir = "results"
reference = "baseline/1"
plot_script = "bands.gnu"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.windows.count, 50);
        assert_eq!(config.windows.time_max, 2.0);
        assert_eq!(config.bands.layout, BandLayout::Narrow);
        assert_eq!(config.comparison.clear_margin, 10.0);
        assert_eq!(config.comparison.noise_floor, 0.5);
        assert_eq!(config.experiment.output_dir, PathBuf::from("results"));
        assert_eq!(config.experiment.reference, "baseline/1");
        assert_eq!(config.experiment.plot_script, PathBuf::from("bands.gnu"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"this is not valid toml {{{{").unwrap();

        let result = Config::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_unknown_layout() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[bands]\nlayout = \"triple\"\n").unwrap();

        let result = Config::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.windows.count, parsed.windows.count);
        assert_eq!(config.bands.layout, parsed.bands.layout);
        assert_eq!(config.comparison.clear_margin, parsed.comparison.clear_margin);
        assert_eq!(config.experiment.output_dir, parsed.experiment.output_dir);
    }
}
