//! Per-replicate study output.

use serde::{Deserialize, Serialize};

/// One bootstrap replicate of one grid cell.
///
/// `est_odds_ratio` and `bias` are infinite or NaN when `degenerate` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub bootstraps: usize,
    pub sample_size: usize,
    pub error_rate: f64,
    pub recall_rate: f64,
    #[serde(skip)]
    pub cell: usize,
    pub replicate: usize,
    pub n_samples: usize,
    pub est_odds_ratio: f64,
    pub est_y0: f64,
    pub est_y1: f64,
    pub true_odds_ratio: f64,
    pub bias: f64,
    pub degenerate: bool,
}

impl StudyRecord {
    pub fn sort_key(&self) -> (usize, usize) {
        (self.cell, self.replicate)
    }
}

/// A cell or replicate that produced no estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellFailure {
    pub cell: usize,
    pub error_rate: f64,
    pub recall_rate: f64,
    /// `None` when the whole cell was skipped.
    pub replicate: Option<usize>,
    pub code: String,
    pub message: String,
}

impl CellFailure {
    pub fn sort_key(&self) -> (usize, usize) {
        (self.cell, self.replicate.unwrap_or(0))
    }
}
