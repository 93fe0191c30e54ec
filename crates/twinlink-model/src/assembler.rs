//! Assembles the twin-error Bayesian network from the causal CPDs.
//!
//! The true record (C, A, Y) is duplicated into an independent twin
//! (C1, A1, Y1). A match-error indicator E decides, per record, whether the
//! analyst sees the true values or the twin's.

use twinlink_core::errors::ModelError;
use twinlink_core::tracing::events;
use twinlink_core::{CausalParams, CovariateHandling};

use crate::causal::build_causal_cpds;
use crate::cpd::TabularCpd;
use crate::cpd_set::CpdSet;
use crate::graph::{causal_edges, ModelGraph};
use crate::network::BayesianModel;
use crate::variable::Variable;

/// Builder for twin-error models at a fixed error rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinErrorAssembler {
    error_rate: f64,
    covariate: CovariateHandling,
}

impl TwinErrorAssembler {
    pub fn new(error_rate: f64) -> Self {
        Self {
            error_rate,
            covariate: CovariateHandling::default(),
        }
    }

    pub fn with_covariate(mut self, covariate: CovariateHandling) -> Self {
        self.covariate = covariate;
        self
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    pub fn covariate(&self) -> CovariateHandling {
        self.covariate
    }

    /// Build the model over `edges` from base CPDs for C, A and Y.
    pub fn assemble(
        &self,
        edges: &[(Variable, Variable)],
        base: &CpdSet,
    ) -> Result<BayesianModel, ModelError> {
        if !self.error_rate.is_finite() || !(0.0..=1.0).contains(&self.error_rate) {
            return Err(ModelError::out_of_range("error_rate", self.error_rate));
        }
        let graph = ModelGraph::new(edges)?;

        let mut derived = CpdSet::new();
        for truth in Variable::CAUSAL {
            derived.insert(twin_cpd(base.require(truth)?)?)?;
        }
        derived.insert(TabularCpd::marginal(Variable::E, 1.0 - self.error_rate)?)?;
        for observed in Variable::OBSERVED {
            derived.insert(self.observation_cpd(observed)?)?;
        }

        let cpds = base.clone().merge(derived)?;
        let model = BayesianModel::new(graph, cpds)?;
        events::model_built(self.error_rate, model.node_count(), model.edge_count());
        Ok(model)
    }

    /// Deterministic gate with evidence `[E, twin, true]`.
    fn observation_cpd(&self, observed: Variable) -> Result<TabularCpd, ModelError> {
        let (twin, truth) = observed.sources().ok_or_else(|| {
            ModelError::mismatch(format!("{observed} is not an observed variable"))
        })?;
        let evidence = vec![Variable::E, twin, truth];
        let copies_truth =
            observed == Variable::CObs && self.covariate == CovariateHandling::Accurate;
        if copies_truth {
            TabularCpd::selector(observed, evidence, |s| s[2])
        } else {
            TabularCpd::selector(observed, evidence, |s| if s[0] == 0 { s[2] } else { s[1] })
        }
    }
}

/// Same table as `cpd`, moved onto the twin variable and twin parents.
fn twin_cpd(cpd: &TabularCpd) -> Result<TabularCpd, ModelError> {
    let variable = cpd.variable();
    let twin = variable.twin().ok_or_else(|| {
        ModelError::mismatch(format!("base CPD for {variable} is not causal"))
    })?;
    let evidence = cpd
        .evidence()
        .iter()
        .map(|e| {
            e.twin().ok_or_else(|| {
                ModelError::mismatch(format!(
                    "base CPD for {variable} has evidence {e} outside C, A, Y"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    cpd.reindexed(twin, evidence)
}

/// Twin-error model with the default covariate handling.
pub fn build_twin_error_model(
    edges: &[(Variable, Variable)],
    base: &CpdSet,
    error_rate: f64,
) -> Result<BayesianModel, ModelError> {
    TwinErrorAssembler::new(error_rate).assemble(edges, base)
}

/// The three-node causal model C → A, C → Y, A → Y.
pub fn build_causal_model(params: &CausalParams) -> Result<BayesianModel, ModelError> {
    let graph = ModelGraph::new(causal_edges())?;
    BayesianModel::new(graph, build_causal_cpds(params)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::twin_error_edges;

    fn base() -> CpdSet {
        build_causal_cpds(&CausalParams::new(0.2)).unwrap()
    }

    #[test]
    fn test_twin_cpds_copy_values() {
        let model = build_twin_error_model(twin_error_edges(), &base(), 0.05)
            .unwrap();
        for truth in Variable::CAUSAL {
            let original = model.cpd(truth).unwrap();
            let twin = model.cpd(truth.twin().unwrap()).unwrap();
            assert_eq!(twin.values(), original.values());
            let mapped: Vec<Variable> = original
                .evidence()
                .iter()
                .map(|e| e.twin().unwrap())
                .collect();
            assert_eq!(twin.evidence(), mapped.as_slice());
        }
    }

    #[test]
    fn test_error_indicator() {
        let model = build_twin_error_model(twin_error_edges(), &base(), 0.05)
            .unwrap();
        let e = model.cpd(Variable::E).unwrap();
        assert!((e.probability(1, &[]) - 0.05).abs() < 1e-15);
        assert!((e.probability(0, &[]) - 0.95).abs() < 1e-15);
    }

    #[test]
    fn test_accurate_covariate_copies_truth() {
        let model = TwinErrorAssembler::new(0.5)
            .with_covariate(CovariateHandling::Accurate)
            .assemble(twin_error_edges(), &base())
            .unwrap();
        let c_obs = model.cpd(Variable::CObs).unwrap();
        assert_eq!(c_obs.evidence(), &[Variable::E, Variable::C1, Variable::C]);
        assert_eq!(
            c_obs.values()[1],
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]
        );

        let a_obs = model.cpd(Variable::AObs).unwrap();
        assert_eq!(
            a_obs.values()[1],
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_rejects_invalid_error_rate() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let err = build_twin_error_model(twin_error_edges(), &base(), rate)
                .unwrap_err();
            assert!(matches!(
                err,
                ModelError::InvalidParameter { ref name, .. } if name == "error_rate"
            ));
        }
    }

    #[test]
    fn test_rejects_base_without_outcome() {
        let mut partial = CpdSet::new();
        for v in [Variable::C, Variable::A] {
            partial.insert(base().require(v).unwrap().clone()).unwrap();
        }
        let err = build_twin_error_model(twin_error_edges(), &partial, 0.1)
            .unwrap_err();
        assert_eq!(err, ModelError::mismatch("missing CPD for Y"));
    }
}
