//! Error handling for twinlink.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod estimation_error;
pub mod model_error;
pub mod study_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::TwinlinkErrorCode;
pub use estimation_error::EstimationError;
pub use model_error::ModelError;
pub use study_error::StudyError;
