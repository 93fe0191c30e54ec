//! # twinlink-model
//!
//! The twin-error Bayesian network. A true causal triple (C, A, Y), an
//! independent twin draw (C1, A1, Y1) from the same structural equations,
//! and an error indicator E that swaps the observed record for the twin.
//!
//! Exact inference is by enumeration (at most 2^10 joint states) and
//! sampling is ancestral, in topological order.

pub mod assembler;
pub mod causal;
pub mod cpd;
pub mod cpd_set;
pub mod graph;
pub mod inference;
pub mod network;
pub mod sampling;
pub mod variable;

pub use assembler::{build_causal_model, build_twin_error_model, TwinErrorAssembler};
pub use causal::build_causal_cpds;
pub use cpd::TabularCpd;
pub use cpd_set::CpdSet;
pub use graph::{causal_edges, twin_error_edges, ModelGraph};
pub use inference::JointDistribution;
pub use network::{Assignment, BayesianModel};
pub use variable::Variable;
