//! Configuration system for twinlink.
//! TOML-based, layered resolution: CLI > env > file > defaults.

pub mod estimator_config;
pub mod grid_config;
pub mod output_config;
pub mod run_config;
pub mod study_config;

pub use estimator_config::EstimatorConfig;
pub use grid_config::GridConfig;
pub use output_config::OutputConfig;
pub use run_config::RunConfig;
pub use study_config::{CliOverrides, StudyConfig};
