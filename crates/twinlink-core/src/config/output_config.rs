//! Report output configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives the CSV and JSON reports. Created if missing.
    pub dir: PathBuf,
}

impl OutputConfig {
    /// Per-replicate CSV path: `b{bootstraps}_n{sample_size}.csv`.
    pub fn records_path(&self, bootstraps: usize, sample_size: usize) -> PathBuf {
        self.dir.join(format!("b{bootstraps}_n{sample_size}.csv"))
    }

    /// Per-cell JSON summary path: `b{bootstraps}_n{sample_size}_summary.json`.
    pub fn summary_path(&self, bootstraps: usize, sample_size: usize) -> PathBuf {
        self.dir
            .join(format!("b{bootstraps}_n{sample_size}_summary.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
        }
    }
}
