//! # twinlink-study
//!
//! Sweeps match error rate × recall rate, draws bootstrap samples from the
//! twin-error model for every cell, estimates the treatment odds ratio by
//! IPW, and reports the bias against the true odds ratio.

pub mod driver;
pub mod grid;
pub mod record;
pub mod report;
pub mod seed;
pub mod summary;

pub use driver::{StudyDriver, StudyReport};
pub use grid::{GridCell, ParameterGrid};
pub use record::{CellFailure, StudyRecord};
pub use report::{write_records_csv, write_summary_json};
pub use summary::{summarize, CellSummary};
