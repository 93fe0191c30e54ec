//! # twinlink-core
//!
//! Foundation crate for the twinlink linkage-error study.
//! Defines shared data types, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::StudyConfig;
pub use errors::{ConfigError, DataError, EstimationError, ModelError, StudyError};
pub use models::{CausalParams, CovariateHandling, SampleTable};
