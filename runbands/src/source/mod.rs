use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to scan experiment tree: {0}")]
    Scan(String),
    #[error("Failed to read run {0}: {1}")]
    ReadRun(PathBuf, String),
    #[error("Failed to read summary {0}: {1}")]
    ReadSummary(PathBuf, String),
    #[error("Failed to write summary {0}: {1}")]
    WriteSummary(PathBuf, String),
}

/// One experiment variant: `<instance>/<test>/<value>` under the output
/// root. The instance is one generated problem, the test is a scheme
/// under study and the value is the scheme's parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigurationId {
    pub instance: String,
    pub test: String,
    pub value: String,
}

impl ConfigurationId {
    pub fn new(
        instance: impl Into<String>,
        test: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            instance: instance.into(),
            test: test.into(),
            value: value.into(),
        }
    }

    /// `<test>/<value>`, the variant's name within its instance.
    pub fn variant(&self) -> String {
        format!("{}/{}", self.test, self.value)
    }

    /// Human-readable label used in reports and plot titles.
    pub fn label(&self) -> String {
        format!("{} {}", self.test, self.value)
    }

    /// The variant's directory relative to the output root.
    pub fn rel_dir(&self) -> PathBuf {
        PathBuf::from(&self.instance)
            .join(&self.test)
            .join(&self.value)
    }
}

/// One run file: its name and raw text.
#[derive(Debug, Clone)]
pub struct RunFile {
    pub name: String,
    pub text: String,
}

/// Where configurations, their runs and their summaries live.
///
/// The pipeline only sees this seam, which keeps the directory convention
/// out of the algorithms.
pub trait ConfigurationSource {
    /// Every configuration under the root, sorted.
    fn configurations(&self) -> Result<Vec<ConfigurationId>, SourceError>;

    /// Every run of a configuration, in file order.
    fn runs(&self, id: &ConfigurationId) -> Result<Vec<RunFile>, SourceError>;

    /// The persisted summary, or `None` if the configuration has not
    /// produced one yet.
    fn read_summary(&self, id: &ConfigurationId) -> Result<Option<String>, SourceError>;

    fn write_summary(&self, id: &ConfigurationId, text: &str) -> Result<(), SourceError>;

    /// Path of a configuration's summary file, for artifacts that need
    /// to reference it (the plot script).
    fn summary_path(&self, id: &ConfigurationId) -> PathBuf;
}

mod fs;
pub use fs::FsSource;
