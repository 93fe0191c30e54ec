//! Exact inference by enumeration.
//!
//! The twin-error model has ten binary nodes, so the full joint has 1024
//! states and enumerating it is cheaper than any message-passing scheme.

use std::collections::HashSet;

use twinlink_core::errors::ModelError;

use crate::cpd::{column_assignment, column_index};
use crate::network::{Assignment, BayesianModel};
use crate::variable::Variable;

/// A joint distribution over a subset of variables.
///
/// `probabilities[j]` is the probability of the assignment encoded by `j`
/// with the same column ordering as CPDs: the first variable is the most
/// significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct JointDistribution {
    variables: Vec<Variable>,
    probabilities: Vec<f64>,
}

impl JointDistribution {
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Probability of `states`, aligned with [`Self::variables`].
    pub fn probability(&self, states: &[u8]) -> Option<f64> {
        if states.len() != self.variables.len() || states.iter().any(|s| *s > 1) {
            return None;
        }
        self.probabilities.get(column_index(states)).copied()
    }

    /// Iterate `(assignment, probability)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<u8>, f64)> + '_ {
        let n = self.variables.len();
        self.probabilities
            .iter()
            .enumerate()
            .map(move |(j, p)| (column_assignment(j, n), *p))
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Largest absolute difference between two tables over the same variables.
    pub fn max_abs_diff(&self, other: &JointDistribution) -> Option<f64> {
        if self.variables != other.variables {
            return None;
        }
        Some(
            self.probabilities
                .iter()
                .zip(&other.probabilities)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl BayesianModel {
    /// Marginal joint distribution of `query`, in the order given.
    pub fn marginal(&self, query: &[Variable]) -> Result<JointDistribution, ModelError> {
        self.validate_query(query)?;

        let mut probabilities = vec![0.0; 1usize << query.len()];
        self.enumerate(|states, p| {
            let j = query
                .iter()
                .fold(0usize, |idx, v| idx * 2 + states[v.index()] as usize);
            probabilities[j] += p;
        });

        Ok(JointDistribution {
            variables: query.to_vec(),
            probabilities,
        })
    }

    /// P(event), where `event` fixes the states of some variables.
    ///
    /// The empty event is certain.
    pub fn probability_of(&self, event: &Assignment) -> Result<f64, ModelError> {
        if event.is_empty() {
            return Ok(1.0);
        }
        let vars: Vec<Variable> = event.keys().copied().collect();
        let states: Vec<u8> = event.values().copied().collect();
        let joint = self.marginal(&vars)?;
        joint.probability(&states).ok_or_else(|| ModelError::InvalidQuery {
            reason: "event holds a non-binary state".to_string(),
        })
    }

    /// P(target = state | given). Fails if `given` has probability zero.
    pub fn conditional(
        &self,
        target: Variable,
        state: u8,
        given: &Assignment,
    ) -> Result<f64, ModelError> {
        if given.contains_key(&target) {
            return Err(ModelError::InvalidQuery {
                reason: format!("{target} appears on both sides of the conditional"),
            });
        }
        let denominator = self.probability_of(given)?;
        if denominator <= 0.0 {
            return Err(ModelError::InvalidQuery {
                reason: "conditioning event has probability zero".to_string(),
            });
        }
        let mut joint = given.clone();
        joint.insert(target, state);
        Ok(self.probability_of(&joint)? / denominator)
    }

    fn validate_query(&self, query: &[Variable]) -> Result<(), ModelError> {
        if query.is_empty() {
            return Err(ModelError::InvalidQuery {
                reason: "query names no variables".to_string(),
            });
        }
        let mut seen = HashSet::with_capacity(query.len());
        for &v in query {
            if !self.contains(v) {
                return Err(ModelError::UnknownVariable {
                    name: v.name().to_string(),
                });
            }
            if !seen.insert(v) {
                return Err(ModelError::InvalidQuery {
                    reason: format!("{v} is queried twice"),
                });
            }
        }
        Ok(())
    }

    /// Visit every full state with non-zero probability.
    fn enumerate<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8; Variable::COUNT], f64),
    {
        let nodes = self.topological_order();
        let mut states = [0u8; Variable::COUNT];
        for j in 0..(1usize << nodes.len()) {
            for (pos, v) in nodes.iter().enumerate() {
                states[v.index()] = ((j >> pos) & 1) as u8;
            }
            let p = self.chain_probability(&states);
            if p > 0.0 {
                visit(&states, p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::build_causal_model;
    use twinlink_core::CausalParams;

    #[test]
    fn test_marginal_of_root() {
        let model = build_causal_model(&CausalParams::new(0.2)).unwrap();
        let joint = model.marginal(&[Variable::C]).unwrap();
        assert!((joint.probability(&[0]).unwrap() - 0.5).abs() < 1e-12);
        assert!((joint.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_marginal_order_follows_query() {
        let model = build_causal_model(&CausalParams::new(0.2)).unwrap();
        let ay = model.marginal(&[Variable::A, Variable::Y]).unwrap();
        let ya = model.marginal(&[Variable::Y, Variable::A]).unwrap();
        for (states, p) in ay.iter() {
            let swapped = ya.probability(&[states[1], states[0]]).unwrap();
            assert!((p - swapped).abs() < 1e-15);
        }
    }

    #[test]
    fn test_conditional_recovers_cpd() {
        let model = build_causal_model(&CausalParams::new(0.2)).unwrap();
        let given: Assignment = [(Variable::A, 1), (Variable::C, 1)].into_iter().collect();
        let p = model.conditional(Variable::Y, 1, &given).unwrap();
        assert!((p - 0.024 * 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_empty_event_is_certain() {
        let model = build_causal_model(&CausalParams::new(0.2)).unwrap();
        assert_eq!(model.probability_of(&Assignment::new()).unwrap(), 1.0);

        let p = model
            .conditional(Variable::Y, 1, &Assignment::new())
            .unwrap();
        let marginal = model
            .marginal(&[Variable::Y])
            .unwrap()
            .probability(&[1])
            .unwrap();
        assert!((p - marginal).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_queries() {
        let model = build_causal_model(&CausalParams::new(0.2)).unwrap();
        assert!(matches!(
            model.marginal(&[]),
            Err(ModelError::InvalidQuery { .. })
        ));
        assert!(matches!(
            model.marginal(&[Variable::A, Variable::A]),
            Err(ModelError::InvalidQuery { .. })
        ));
        assert!(matches!(
            model.marginal(&[Variable::E]),
            Err(ModelError::UnknownVariable { .. })
        ));
    }
}
