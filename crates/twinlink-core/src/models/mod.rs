//! Shared data models passed between the model, estimation, and study crates.

pub mod causal_params;
pub mod covariate;
pub mod sample_table;

pub use causal_params::CausalParams;
pub use covariate::CovariateHandling;
pub use sample_table::SampleTable;
