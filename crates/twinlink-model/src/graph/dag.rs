//! petgraph DiGraph wrapper with cycle rejection on every edge insertion.

use std::collections::HashMap;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use twinlink_core::errors::ModelError;

use crate::variable::Variable;

/// A directed acyclic graph over model variables.
///
/// Nodes are the variables named by the edge list. Construction rejects
/// self-loops, duplicate edges, and any edge that would close a cycle.
#[derive(Debug, Clone)]
pub struct ModelGraph {
    graph: DiGraph<Variable, ()>,
    node_index: HashMap<Variable, NodeIndex>,
    edges: Vec<(Variable, Variable)>,
}

impl ModelGraph {
    /// Build a DAG from `(parent, child)` pairs.
    pub fn new(edges: &[(Variable, Variable)]) -> Result<Self, ModelError> {
        let mut dag = Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            edges: Vec::with_capacity(edges.len()),
        };
        for &(parent, child) in edges {
            dag.add_edge(parent, child)?;
        }
        Ok(dag)
    }

    /// Build a DAG from `(parent, child)` names. Unknown names are
    /// `UnknownVariable`.
    pub fn from_named_edges(edges: &[(&str, &str)]) -> Result<Self, ModelError> {
        let parsed = edges
            .iter()
            .map(|(p, c)| Ok((parse(p)?, parse(c)?)))
            .collect::<Result<Vec<_>, ModelError>>()?;
        Self::new(&parsed)
    }

    fn add_edge(&mut self, parent: Variable, child: Variable) -> Result<(), ModelError> {
        if parent == child {
            return Err(ModelError::CycleDetected {
                path: format!("{parent} -> {child}"),
            });
        }
        if self.edges.contains(&(parent, child)) {
            return Err(ModelError::mismatch(format!(
                "duplicate edge {parent} -> {child}"
            )));
        }

        let source = self.ensure_node(parent);
        let target = self.ensure_node(child);

        // If child already reaches parent, parent -> child closes a cycle.
        if self.has_path(target, source) {
            return Err(ModelError::CycleDetected {
                path: format!("{parent} -> {child} -> ... -> {parent}"),
            });
        }

        self.graph.add_edge(source, target, ());
        self.edges.push((parent, child));
        Ok(())
    }

    fn ensure_node(&mut self, variable: Variable) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&variable) {
            return idx;
        }
        let idx = self.graph.add_node(variable);
        self.node_index.insert(variable, idx);
        idx
    }

    /// DFS reachability: can we reach `to` from `from`?
    fn has_path(&self, from: NodeIndex, to: NodeIndex) -> bool {
        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(node) = dfs.next(&self.graph) {
            if node == to {
                return true;
            }
        }
        false
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.node_index.contains_key(&variable)
    }

    /// Nodes, in declaration order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: Vec<Variable> = self.node_index.keys().copied().collect();
        vars.sort();
        vars
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[(Variable, Variable)] {
        &self.edges
    }

    /// Parents of `variable`, in edge insertion order.
    pub fn parents(&self, variable: Variable) -> Vec<Variable> {
        self.edges
            .iter()
            .filter(|(_, c)| *c == variable)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Children of `variable`, in edge insertion order.
    pub fn children(&self, variable: Variable) -> Vec<Variable> {
        self.edges
            .iter()
            .filter(|(p, _)| *p == variable)
            .map(|(_, c)| *c)
            .collect()
    }

    /// Nodes without parents.
    pub fn roots(&self) -> Vec<Variable> {
        self.variables()
            .into_iter()
            .filter(|v| {
                self.node_index
                    .get(v)
                    .map(|&idx| {
                        self.graph
                            .neighbors_directed(idx, Direction::Incoming)
                            .next()
                            .is_none()
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    /// A parent-before-child ordering of all nodes.
    pub fn topological_order(&self) -> Result<Vec<Variable>, ModelError> {
        let order = toposort(&self.graph, None).map_err(|cycle| ModelError::CycleDetected {
            path: format!("through {}", self.graph[cycle.node_id()]),
        })?;
        Ok(order.into_iter().map(|idx| self.graph[idx]).collect())
    }

    /// Strongly connected components with more than one node (i.e., cycles).
    pub fn find_cycles(&self) -> Vec<Vec<Variable>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| scc.into_iter().map(|idx| self.graph[idx]).collect())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn parse(name: &str) -> Result<Variable, ModelError> {
    Variable::from_name(name).ok_or_else(|| ModelError::UnknownVariable {
        name: name.to_string(),
    })
}
