//! # twinlink-estimate
//!
//! Estimates the causal effect of a binary treatment from a sampled table.
//! A logistic propensity model is fit by IRLS, the arms are reweighted by
//! inverse propensity, and the two potential-outcome means are turned into
//! an odds ratio.

pub mod ipw;
pub mod logistic;
pub mod odds_ratio;

pub use ipw::{ipw, IpwEstimator, PotentialOutcomes};
pub use logistic::{FitOptions, LogisticRegression};
pub use odds_ratio::{checked_odds_ratio, compute_or};
