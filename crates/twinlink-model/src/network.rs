//! A discrete Bayesian network: DAG plus one CPD per node.

use std::collections::BTreeMap;

use twinlink_core::errors::ModelError;

use crate::cpd::TabularCpd;
use crate::cpd_set::CpdSet;
use crate::graph::ModelGraph;
use crate::variable::Variable;

/// A full or partial assignment of states to variables.
pub type Assignment = BTreeMap<Variable, u8>;

/// A validated Bayesian network over binary variables.
///
/// Invariants checked at construction:
/// - every node has exactly one CPD, and no CPD names a variable outside the graph;
/// - the evidence set of each CPD equals the node's parent set.
///
/// The evidence *order* of a CPD may differ from the graph's parent order;
/// the CPD's own order defines its column layout.
#[derive(Debug, Clone)]
pub struct BayesianModel {
    graph: ModelGraph,
    cpds: CpdSet,
    order: Vec<Variable>,
}

impl BayesianModel {
    pub fn new(graph: ModelGraph, cpds: CpdSet) -> Result<Self, ModelError> {
        for variable in graph.variables() {
            let cpd = cpds.require(variable)?;
            let mut parents = graph.parents(variable);
            let mut evidence = cpd.evidence().to_vec();
            parents.sort();
            evidence.sort();
            if parents != evidence {
                return Err(ModelError::mismatch(format!(
                    "CPD for {variable} has evidence {} but graph parents are {}",
                    join(&evidence),
                    join(&parents)
                )));
            }
        }
        if let Some(extra) = cpds.variables().find(|v| !graph.contains(*v)) {
            return Err(ModelError::mismatch(format!(
                "CPD for {extra} has no node in the graph"
            )));
        }

        let order = graph.topological_order()?;
        Ok(Self { graph, cpds, order })
    }

    pub fn graph(&self) -> &ModelGraph {
        &self.graph
    }

    /// Nodes in declaration order.
    pub fn variables(&self) -> Vec<Variable> {
        self.graph.variables()
    }

    pub fn edges(&self) -> &[(Variable, Variable)] {
        self.graph.edges()
    }

    pub fn parents(&self, variable: Variable) -> Vec<Variable> {
        self.graph.parents(variable)
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.graph.contains(variable)
    }

    pub fn cpd(&self, variable: Variable) -> Option<&TabularCpd> {
        self.cpds.get(variable)
    }

    pub fn cpds(&self) -> &CpdSet {
        &self.cpds
    }

    /// Parent-before-child order, computed once at construction.
    pub fn topological_order(&self) -> &[Variable] {
        &self.order
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Probability of a complete assignment (chain rule over all CPDs).
    ///
    /// Fails with `InvalidQuery` if the assignment misses a node, names a
    /// variable outside the model, or holds a non-binary state.
    pub fn joint_probability(&self, assignment: &Assignment) -> Result<f64, ModelError> {
        if let Some(extra) = assignment.keys().find(|v| !self.contains(**v)) {
            return Err(ModelError::UnknownVariable {
                name: extra.name().to_string(),
            });
        }
        let mut states = [0u8; Variable::COUNT];
        for &variable in &self.order {
            let state = *assignment.get(&variable).ok_or_else(|| ModelError::InvalidQuery {
                reason: format!("assignment is missing {variable}"),
            })?;
            if state > 1 {
                return Err(ModelError::InvalidQuery {
                    reason: format!("{variable} = {state} is not a binary state"),
                });
            }
            states[variable.index()] = state;
        }
        Ok(self.chain_probability(&states))
    }

    /// Product of CPD entries for a full state vector indexed by `Variable::index`.
    pub(crate) fn chain_probability(&self, states: &[u8; Variable::COUNT]) -> f64 {
        let mut p = 1.0;
        for cpd in self.cpds.iter() {
            let column = cpd.column_of(|e| states[e.index()]);
            let entry = cpd
                .column(column)
                .map(|c| c[states[cpd.variable().index()] as usize])
                .unwrap_or(0.0);
            p *= entry;
            if p == 0.0 {
                break;
            }
        }
        p
    }
}

fn join(vars: &[Variable]) -> String {
    let names: Vec<&str> = vars.iter().map(|v| v.name()).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::causal::build_causal_cpds;
    use crate::graph::causal_edges;
    use twinlink_core::CausalParams;

    fn causal_model() -> BayesianModel {
        let graph = ModelGraph::new(causal_edges()).unwrap();
        let cpds = build_causal_cpds(&CausalParams::new(0.2)).unwrap();
        BayesianModel::new(graph, cpds).unwrap()
    }

    #[test]
    fn test_joint_probability_chain_rule() {
        let model = causal_model();
        let assignment: Assignment = [(Variable::C, 0), (Variable::A, 1), (Variable::Y, 1)]
            .into_iter()
            .collect();
        // 0.5 * 0.2 * (0.024 * 1.4)
        let expected = 0.5 * 0.2 * 0.024 * 1.4;
        let p = model.joint_probability(&assignment).unwrap();
        assert!((p - expected).abs() < 1e-15);
    }

    #[test]
    fn test_joint_probability_rejects_partial_assignment() {
        let model = causal_model();
        let assignment: Assignment = [(Variable::C, 0)].into_iter().collect();
        assert!(matches!(
            model.joint_probability(&assignment),
            Err(ModelError::InvalidQuery { .. })
        ));

        let assignment: Assignment = [
            (Variable::C, 0),
            (Variable::A, 0),
            (Variable::Y, 0),
            (Variable::E, 0),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            model.joint_probability(&assignment),
            Err(ModelError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn test_rejects_evidence_parent_mismatch() {
        let graph =
            ModelGraph::new(&[(Variable::C, Variable::A), (Variable::C, Variable::Y)])
                .unwrap();
        let cpds = build_causal_cpds(&CausalParams::new(0.0)).unwrap();
        let err = BayesianModel::new(graph, cpds).unwrap_err();
        assert!(matches!(err, ModelError::StructuralMismatch { .. }));
    }

    #[test]
    fn test_rejects_missing_and_extra_cpds() {
        let graph = ModelGraph::new(causal_edges()).unwrap();
        let mut cpds = CpdSet::new();
        cpds.insert(TabularCpd::marginal(Variable::C, 0.5).unwrap())
            .unwrap();
        assert!(BayesianModel::new(graph.clone(), cpds).is_err());

        let e_cpd = TabularCpd::marginal(Variable::E, 0.9).unwrap();
        let cpds = build_causal_cpds(&CausalParams::new(0.0))
            .unwrap()
            .merge(CpdSet::from_cpds([e_cpd]).unwrap())
            .unwrap();
        let err = BayesianModel::new(graph, cpds).unwrap_err();
        assert_eq!(
            err,
            ModelError::mismatch("CPD for E has no node in the graph")
        );
    }
}
