//! Parameter grid configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Values swept by the study: every error rate is crossed with every recall rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Match error rates, p(E = 1). Range checks happen at model build time.
    pub error_rates: Vec<f64>,
    /// Share of the nominal sample that is successfully linked, in (0, 1].
    pub recall_rates: Vec<f64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            error_rates: constants::DEFAULT_ERROR_RATES.to_vec(),
            recall_rates: constants::DEFAULT_RECALL_RATES.to_vec(),
        }
    }
}
