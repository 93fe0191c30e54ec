//! Monte Carlo run configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::CovariateHandling;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Bootstrap replicates per grid cell.
    pub bootstraps: usize,
    /// Nominal sample size before recall is applied.
    pub sample_size: usize,
    /// Base RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Worker threads (0 = rayon default).
    pub threads: usize,
    /// Shape of the C_obs mixing table.
    ///
    /// The default, `substituted`, leaves the observed joint unchanged by
    /// linkage error, so a run with it measures sampling noise only. Use
    /// `accurate` to sweep linkage bias.
    pub covariate: CovariateHandling,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            bootstraps: constants::DEFAULT_BOOTSTRAPS,
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
            seed: None,
            threads: constants::DEFAULT_THREADS,
            covariate: CovariateHandling::default(),
        }
    }
}
