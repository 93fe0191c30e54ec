//! Study driver errors.

use super::error_code::{self, TwinlinkErrorCode};
use super::{ConfigError, EstimationError, ModelError};

/// Errors that abort a whole study run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    #[error("Report error at {path}: {message}")]
    Report { path: String, message: String },

    #[error("Thread pool error: {message}")]
    ThreadPool { message: String },
}

impl TwinlinkErrorCode for StudyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Estimation(e) => e.error_code(),
            Self::Report { .. } => error_code::REPORT_ERROR,
            Self::ThreadPool { .. } => error_code::THREAD_POOL_ERROR,
        }
    }
}
