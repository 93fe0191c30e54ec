//! Graph layer: the fixed twin-error template and its petgraph DAG.

pub mod dag;
pub mod template;

pub use dag::ModelGraph;
pub use template::{causal_edges, twin_error_edges, TWIN_ERROR_EDGES};
