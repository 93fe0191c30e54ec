//! Inverse probability weighting.
//!
//! Propensity e(x) = P(treatment = 1 | confounders) comes from a logistic
//! fit. Treated rows are weighted by 1 / e(x), control rows by
//! 1 / (1 - e(x)), and each arm's potential-outcome mean is the weighted
//! average of the outcome within that arm:
//!
//! ```text
//! y_a = Σ_{T=a} w·Y / Σ_{T=a} w
//! ```

use twinlink_core::config::EstimatorConfig;
use twinlink_core::errors::{DataError, EstimationError};
use twinlink_core::SampleTable;

use crate::logistic::{FitOptions, LogisticRegression};
use crate::odds_ratio::{checked_odds_ratio, compute_or};

/// Estimated mean outcome under control (`y0`) and under treatment (`y1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialOutcomes {
    pub y0: f64,
    pub y1: f64,
}

impl PotentialOutcomes {
    /// Odds ratio of treatment vs. control. Infinite or NaN when degenerate.
    pub fn odds_ratio(&self) -> f64 {
        compute_or(self.y0, self.y1)
    }

    /// Odds ratio, or `DegenerateEstimate` when it is not finite.
    pub fn checked_odds_ratio(&self) -> Result<f64, EstimationError> {
        checked_odds_ratio(self.y0, self.y1)
    }
}

/// IPW estimator bound to a set of column names.
#[derive(Debug, Clone, PartialEq)]
pub struct IpwEstimator {
    treatment: String,
    outcome: String,
    confounders: Vec<String>,
    options: FitOptions,
}

impl IpwEstimator {
    pub fn new(
        treatment: impl Into<String>,
        outcome: impl Into<String>,
        confounders: &[&str],
    ) -> Self {
        Self {
            treatment: treatment.into(),
            outcome: outcome.into(),
            confounders: confounders.iter().map(|c| c.to_string()).collect(),
            options: FitOptions::default(),
        }
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self {
            treatment: config.treatment.clone(),
            outcome: config.outcome.clone(),
            confounders: config.confounders.clone(),
            options: FitOptions::from(config),
        }
    }

    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    pub fn confounders(&self) -> &[String] {
        &self.confounders
    }

    pub fn estimate(&self, table: &SampleTable) -> Result<PotentialOutcomes, EstimationError> {
        if table.is_empty() {
            return Err(EstimationError::EmptySample);
        }
        let treatment = table.require(&self.treatment)?;
        let outcome = table.require(&self.outcome)?;
        let confounders = self
            .confounders
            .iter()
            .map(|name| table.require(name))
            .collect::<Result<Vec<_>, DataError>>()?;

        for arm in [0u8, 1] {
            if !treatment.contains(&arm) {
                return Err(EstimationError::EmptyArm { arm });
            }
        }

        let model = LogisticRegression::fit(&confounders, treatment, &self.options)?;
        let propensity = model.predict(&confounders, table.n_rows())?;

        let mut weighted = [0.0_f64; 2];
        let mut total = [0.0_f64; 2];
        for ((&t, &y), &e) in treatment.iter().zip(outcome).zip(&propensity) {
            let w = if t == 1 { 1.0 / e } else { 1.0 / (1.0 - e) };
            weighted[t as usize] += w * f64::from(y);
            total[t as usize] += w;
        }

        Ok(PotentialOutcomes {
            y0: weighted[0] / total[0],
            y1: weighted[1] / total[1],
        })
    }
}

/// IPW potential outcomes with default fit options.
pub fn ipw(
    table: &SampleTable,
    treatment: &str,
    outcome: &str,
    confounders: &[&str],
) -> Result<PotentialOutcomes, EstimationError> {
    IpwEstimator::new(treatment, outcome, confounders)
        .estimate(table)
}
