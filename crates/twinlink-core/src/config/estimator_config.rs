//! IPW estimator configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which sampled columns the estimator reads, and how the propensity model is fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub treatment: String,
    pub outcome: String,
    pub confounders: Vec<String>,
    /// IRLS iteration cap.
    pub max_iterations: usize,
    /// IRLS convergence tolerance on the max absolute coefficient update.
    pub tolerance: f64,
}

impl EstimatorConfig {
    /// Confounder names as string slices.
    pub fn confounder_names(&self) -> Vec<&str> {
        self.confounders.iter().map(String::as_str).collect()
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            treatment: constants::DEFAULT_TREATMENT.to_string(),
            outcome: constants::DEFAULT_OUTCOME.to_string(),
            confounders: vec![constants::DEFAULT_CONFOUNDER.to_string()],
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            tolerance: constants::DEFAULT_TOLERANCE,
        }
    }
}
