//! Tabular conditional probability distributions over binary variables.
//!
//! # Column ordering
//!
//! A CPD for `V` with evidence `[P1, P2, ..., Pk]` is a 2 × 2^k matrix.
//! Row `s` holds P(V = s | ·). Column `j` holds the distribution for the
//! evidence assignment given by the binary expansion of `j`, with `P1` as
//! the most significant bit (varies slowest) and `Pk` as the least
//! significant bit (varies fastest):
//!
//! ```text
//! evidence [E, A1, A]     column  0  1  2  3  4  5  6  7
//!                         E       0  0  0  0  1  1  1  1
//!                         A1      0  0  1  1  0  0  1  1
//!                         A       0  1  0  1  0  1  0  1
//! ```
//!
//! Every index computation goes through [`column_index`] and
//! [`column_assignment`]; nothing else encodes the order.

use twinlink_core::constants::{BINARY_CARDINALITY, NORMALIZATION_TOLERANCE};
use twinlink_core::errors::ModelError;

use crate::variable::Variable;

/// Column of the evidence assignment `states` (first state most significant).
pub fn column_index(states: &[u8]) -> usize {
    states
        .iter()
        .fold(0, |idx, &s| idx * BINARY_CARDINALITY + s as usize)
}

/// Evidence assignment of column `column` for `n_evidence` binary parents.
pub fn column_assignment(column: usize, n_evidence: usize) -> Vec<u8> {
    (0..n_evidence)
        .map(|pos| ((column >> (n_evidence - 1 - pos)) & 1) as u8)
        .collect()
}

/// P(variable | evidence) for a binary variable with binary parents.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularCpd {
    variable: Variable,
    evidence: Vec<Variable>,
    /// One `[P(V=0|j), P(V=1|j)]` pair per evidence column `j`.
    columns: Vec<[f64; 2]>,
}

impl TabularCpd {
    /// Build a CPD from its two rows, `rows[s][j] = P(V = s | column j)`.
    ///
    /// Fails with `StructuralMismatch` on a malformed shape or evidence list,
    /// and with `InvalidParameter` on a probability outside [0, 1] or a
    /// column that does not sum to 1.
    pub fn new(
        variable: Variable,
        evidence: Vec<Variable>,
        rows: [Vec<f64>; 2],
    ) -> Result<Self, ModelError> {
        validate_evidence(variable, &evidence)?;

        let n_columns = 1usize << evidence.len();
        for (state, row) in rows.iter().enumerate() {
            if row.len() != n_columns {
                return Err(ModelError::mismatch(format!(
                    "CPD for {variable} row {state} has {} columns, expected {n_columns}",
                    row.len()
                )));
            }
        }

        let mut columns = Vec::with_capacity(n_columns);
        for j in 0..n_columns {
            let pair = [rows[0][j], rows[1][j]];
            for (state, &p) in pair.iter().enumerate() {
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(ModelError::out_of_range(
                        entry_name(variable, &evidence, state, j),
                        p,
                    ));
                }
            }
            let sum = pair[0] + pair[1];
            if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
                return Err(ModelError::InvalidParameter {
                    name: entry_name(variable, &evidence, 1, j),
                    value: sum,
                    reason: "column does not sum to 1".to_string(),
                });
            }
            columns.push(pair);
        }

        Ok(Self {
            variable,
            evidence,
            columns,
        })
    }

    /// Root CPD with P(V = 0) = `p0`.
    pub fn marginal(variable: Variable, p0: f64) -> Result<Self, ModelError> {
        Self::new(variable, Vec::new(), [vec![p0], vec![1.0 - p0]])
    }

    /// CPD from P(V = 1 | column j) for every column.
    pub fn bernoulli(
        variable: Variable,
        evidence: Vec<Variable>,
        p_one: &[f64],
    ) -> Result<Self, ModelError> {
        // Range-check before forming 1 - p so the error names the input.
        for (j, &p) in p_one.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ModelError::out_of_range(
                    entry_name(variable, &evidence, 1, j),
                    p,
                ));
            }
        }
        let zero_row = p_one.iter().map(|p| 1.0 - p).collect();
        Self::new(variable, evidence, [zero_row, p_one.to_vec()])
    }

    /// Deterministic CPD: in column `j`, V equals `select(assignment of j)`
    /// with probability 1.
    pub fn selector<F>(
        variable: Variable,
        evidence: Vec<Variable>,
        select: F,
    ) -> Result<Self, ModelError>
    where
        F: Fn(&[u8]) -> u8,
    {
        validate_evidence(variable, &evidence)?;
        let n_columns = 1usize << evidence.len();
        let mut rows = [vec![0.0; n_columns], vec![0.0; n_columns]];
        for j in 0..n_columns {
            let chosen = select(&column_assignment(j, evidence.len()));
            if chosen as usize >= BINARY_CARDINALITY {
                return Err(ModelError::mismatch(format!(
                    "selector for {variable} chose state {chosen}"
                )));
            }
            rows[chosen as usize][j] = 1.0;
        }
        Self::new(variable, evidence, rows)
    }

    /// The same table moved onto other variable names.
    ///
    /// Values and evidence cardinalities are kept; only names change.
    pub fn reindexed(
        &self,
        variable: Variable,
        evidence: Vec<Variable>,
    ) -> Result<Self, ModelError> {
        if evidence.len() != self.evidence.len() {
            return Err(ModelError::mismatch(format!(
                "cannot reindex CPD for {} with {} evidence variables onto {variable} with {}",
                self.variable,
                self.evidence.len(),
                evidence.len()
            )));
        }
        validate_evidence(variable, &evidence)?;
        Ok(Self {
            variable,
            evidence,
            columns: self.columns.clone(),
        })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Evidence variables in column-ordering significance (first = slowest).
    pub fn evidence(&self) -> &[Variable] {
        &self.evidence
    }

    /// Cardinality of every evidence variable (always 2).
    pub fn evidence_cardinality(&self) -> Vec<usize> {
        vec![BINARY_CARDINALITY; self.evidence.len()]
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `[P(V=0|j), P(V=1|j)]`.
    pub fn column(&self, j: usize) -> Option<[f64; 2]> {
        self.columns.get(j).copied()
    }

    /// Row `state` of the matrix, one entry per column.
    pub fn row(&self, state: u8) -> Vec<f64> {
        self.columns
            .iter()
            .map(|c| c.get(state as usize).copied().unwrap_or(0.0))
            .collect()
    }

    /// The full 2 × 2^k matrix, row-major.
    pub fn values(&self) -> [Vec<f64>; 2] {
        [self.row(0), self.row(1)]
    }

    /// P(V = state | evidence = evidence_states). Out-of-range input gives 0.
    pub fn probability(&self, state: u8, evidence_states: &[u8]) -> f64 {
        if evidence_states.len() != self.evidence.len() || evidence_states.iter().any(|s| *s > 1) {
            return 0.0;
        }
        self.columns[column_index(evidence_states)]
            .get(state as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Column for the evidence values reported by `lookup`.
    pub fn column_of<F>(&self, lookup: F) -> usize
    where
        F: Fn(Variable) -> u8,
    {
        self.evidence
            .iter()
            .fold(0, |idx, &e| idx * BINARY_CARDINALITY + lookup(e) as usize)
    }

    /// Largest |sum of column - 1| over all columns.
    pub fn max_normalization_error(&self) -> f64 {
        self.columns
            .iter()
            .map(|c| (c[0] + c[1] - 1.0).abs())
            .fold(0.0, f64::max)
    }

    /// Whether every column puts all its mass on a single state.
    pub fn is_deterministic(&self) -> bool {
        self.columns
            .iter()
            .all(|c| c[0] * c[1] == 0.0 && c[0] + c[1] == 1.0)
    }
}

fn validate_evidence(variable: Variable, evidence: &[Variable]) -> Result<(), ModelError> {
    if evidence.contains(&variable) {
        return Err(ModelError::mismatch(format!(
            "CPD for {variable} lists itself as evidence"
        )));
    }
    for (i, e) in evidence.iter().enumerate() {
        if evidence[..i].contains(e) {
            return Err(ModelError::mismatch(format!(
                "CPD for {variable} lists evidence {e} twice"
            )));
        }
    }
    Ok(())
}

/// Human-readable name of one table entry, e.g. `P(Y=1 | A=0, C=1)`.
fn entry_name(variable: Variable, evidence: &[Variable], state: usize, column: usize) -> String {
    if evidence.is_empty() {
        return format!("P({variable}={state})");
    }
    let given: Vec<String> = evidence
        .iter()
        .zip(column_assignment(column, evidence.len()))
        .map(|(e, s)| format!("{e}={s}"))
        .collect();
    format!("P({variable}={state} | {})", given.join(", "))
}
