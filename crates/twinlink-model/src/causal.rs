//! CPDs of the un-erred causal model C → A, C → Y, A → Y.
//!
//! p(Y | A, C) deviates from the population potential outcomes by a
//! confounding term that averages out over C:
//!
//! ```text
//! p(Y=1 | A=a, C=0) = po_y_a * (1 + confounding_strength / p_c)
//! p(Y=1 | A=a, C=1) = po_y_a * (1 - confounding_strength / (1 - p_c))
//! ```
//!
//! p(A | C) does not enter the identification of the causal effect and is
//! taken as given.

use twinlink_core::errors::ModelError;
use twinlink_core::CausalParams;

use crate::cpd::TabularCpd;
use crate::cpd_set::CpdSet;
use crate::variable::Variable;

/// Build the CPDs for C, A, and Y.
///
/// Every input and every derived probability must lie in [0, 1]; anything
/// else is `InvalidParameter`, never clamped. `p_c` must be strictly inside
/// (0, 1) because the confounding term divides by both strata.
pub fn build_causal_cpds(params: &CausalParams) -> Result<CpdSet, ModelError> {
    for (name, value) in params.probabilities() {
        check_probability(name, value)?;
    }
    if !params.confounding_strength.is_finite() {
        return Err(ModelError::InvalidParameter {
            name: "confounding_strength".to_string(),
            value: params.confounding_strength,
            reason: "must be finite".to_string(),
        });
    }
    if params.p_c <= 0.0 || params.p_c >= 1.0 {
        return Err(ModelError::InvalidParameter {
            name: "p_c".to_string(),
            value: params.p_c,
            reason: "must be strictly between 0 and 1".to_string(),
        });
    }

    let up = 1.0 + params.confounding_strength / params.p_c;
    let down = 1.0 - params.confounding_strength / (1.0 - params.p_c);

    // Evidence order [A, C]: columns (A, C) = (0,0), (0,1), (1,0), (1,1).
    let p_y = [
        ("p(Y=1|A=0,C=0)", params.po_y_0 * up),
        ("p(Y=1|A=0,C=1)", params.po_y_0 * down),
        ("p(Y=1|A=1,C=0)", params.po_y_1 * up),
        ("p(Y=1|A=1,C=1)", params.po_y_1 * down),
    ];
    for (name, value) in p_y {
        check_probability(name, value)?;
    }

    let cpd_c = TabularCpd::marginal(Variable::C, params.p_c)?;
    let cpd_a = TabularCpd::bernoulli(
        Variable::A,
        vec![Variable::C],
        &[params.p_a1_c0, params.p_a1_c1],
    )?;
    let cpd_y = TabularCpd::bernoulli(
        Variable::Y,
        vec![Variable::A, Variable::C],
        &p_y.map(|(_, p)| p),
    )?;

    CpdSet::from_cpds([cpd_c, cpd_a, cpd_y])
}

fn check_probability(name: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::out_of_range(name, value))
    }
}
