//! Edge set of the twin-error model.
//!
//! The true record (C, A, Y) and the twin record (C1, A1, Y1) follow the same
//! structural equations. Each observed variable is gated by E between its
//! true value and its twin's value.

use crate::variable::Variable::{self, A, A1, AObs, C, C1, CObs, E, Y, Y1, YObs};

/// All 15 edges, causal sub-DAG first.
pub const TWIN_ERROR_EDGES: [(Variable, Variable); 15] = [
    (C, A),
    (C, Y),
    (A, Y),
    (C1, A1),
    (C1, Y1),
    (A1, Y1),
    (C1, CObs),
    (C, CObs),
    (A, AObs),
    (A1, AObs),
    (Y, YObs),
    (Y1, YObs),
    (E, AObs),
    (E, CObs),
    (E, YObs),
];

/// The twin-error template as ordered `(parent, child)` pairs.
pub fn twin_error_edges() -> &'static [(Variable, Variable)] {
    &TWIN_ERROR_EDGES
}

/// The un-erred causal sub-DAG C → A, C → Y, A → Y.
pub fn causal_edges() -> &'static [(Variable, Variable)] {
    &TWIN_ERROR_EDGES[..3]
}
