use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigurationId, ConfigurationSource, RunFile, SourceError};

/// A configuration source over the on-disk
/// `<root>/<instance>/<test>/<value>` hierarchy, with run files named by
/// consecutive integers and summaries persisted as `stats`.
#[derive(Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn dir(&self, id: &ConfigurationId) -> PathBuf {
        self.root.join(id.rel_dir())
    }

    fn subdirectories(path: &Path) -> Result<Vec<String>, SourceError> {
        let entries = fs::read_dir(path)
            .map_err(|e| SourceError::Scan(format!("{}: {}", path.display(), e)))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| SourceError::Scan(format!("{}: {}", path.display(), e)))?;
            let file_type = entry
                .file_type()
                .map_err(|e| SourceError::Scan(format!("{}: {}", path.display(), e)))?;
            if file_type.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Index of the first run file. Trees written by the oldest generator
    /// start at 1 instead of 0.
    fn first_run_index(dir: &Path) -> usize {
        if dir.join("0").is_file() || !dir.join("1").is_file() {
            0
        } else {
            1
        }
    }
}

impl ConfigurationSource for FsSource {
    fn configurations(&self) -> Result<Vec<ConfigurationId>, SourceError> {
        let mut ids = Vec::new();
        for instance in Self::subdirectories(&self.root)? {
            let instance_dir = self.root.join(&instance);
            for test in Self::subdirectories(&instance_dir)? {
                let test_dir = instance_dir.join(&test);
                for value in Self::subdirectories(&test_dir)? {
                    ids.push(ConfigurationId::new(
                        instance.clone(),
                        test.clone(),
                        value,
                    ));
                }
            }
        }
        Ok(ids)
    }

    fn runs(&self, id: &ConfigurationId) -> Result<Vec<RunFile>, SourceError> {
        let dir = self.dir(id);
        let mut runs = Vec::new();
        let mut index = Self::first_run_index(&dir);
        loop {
            let name = index.to_string();
            let path = dir.join(&name);
            if !path.is_file() {
                break;
            }
            let text = fs::read_to_string(&path)
                .map_err(|e| SourceError::ReadRun(path.clone(), e.to_string()))?;
            runs.push(RunFile { name, text });
            index += 1;
        }
        Ok(runs)
    }

    fn read_summary(&self, id: &ConfigurationId) -> Result<Option<String>, SourceError> {
        let path = self.summary_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| SourceError::ReadSummary(path, e.to_string()))
    }

    fn write_summary(&self, id: &ConfigurationId, text: &str) -> Result<(), SourceError> {
        let path = self.summary_path(id);
        fs::write(&path, text).map_err(|e| SourceError::WriteSummary(path, e.to_string()))
    }

    fn summary_path(&self, id: &ConfigurationId) -> PathBuf {
        self.dir(id).join("stats")
    }
}
