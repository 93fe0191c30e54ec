//! Estimation errors.

use super::error_code::{self, TwinlinkErrorCode};
use super::DataError;

/// Errors raised by the propensity model, the IPW estimator, and the
/// odds-ratio computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimationError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("empty sample")]
    EmptySample,

    #[error("no rows with treatment = {arm}")]
    EmptyArm { arm: u8 },

    #[error("singular design matrix at iteration {iteration}")]
    SingularDesign { iteration: usize },

    #[error("propensity model did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("degenerate estimate: y0 = {y0}, y1 = {y1}")]
    DegenerateEstimate { y0: f64, y1: f64 },
}

impl TwinlinkErrorCode for EstimationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Data(e) => e.error_code(),
            Self::EmptySample => error_code::EMPTY_SAMPLE,
            Self::EmptyArm { .. } => error_code::EMPTY_ARM,
            Self::SingularDesign { .. } => error_code::SINGULAR_DESIGN,
            Self::NotConverged { .. } => error_code::NOT_CONVERGED,
            Self::DegenerateEstimate { .. } => error_code::DEGENERATE_ESTIMATE,
        }
    }
}
