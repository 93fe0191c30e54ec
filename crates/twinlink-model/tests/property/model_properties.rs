//! Property tests for twinlink-model: CPD normalization, zero-error
//! equivalence, and full-error gating over random valid parameters.

use proptest::prelude::*;

use twinlink_core::CausalParams;
use twinlink_model::{
    build_causal_cpds, build_causal_model, build_twin_error_model, twin_error_edges, Variable,
};

// Parameters that keep every derived P(Y | A, C) inside [0, 1]:
// |confounding_strength| < min(p_c, 1 - p_c) and po_y_a <= 0.5.
fn params_strategy() -> impl Strategy<Value = CausalParams> {
    (
        0.05_f64..0.95,
        -0.99_f64..0.99,
        0.0_f64..0.5,
        0.0_f64..0.5,
        0.0_f64..=1.0,
        0.0_f64..=1.0,
    )
        .prop_map(|(p_c, scale, po_y_1, po_y_0, p_a1_c0, p_a1_c1)| CausalParams {
            confounding_strength: scale * p_c.min(1.0 - p_c),
            p_c,
            po_y_1,
            po_y_0,
            p_a1_c0,
            p_a1_c1,
        })
}

proptest! {
    #[test]
    fn causal_cpds_are_normalized(params in params_strategy()) {
        let cpds = build_causal_cpds(&params).unwrap();
        for cpd in cpds.iter() {
            prop_assert!(cpd.max_normalization_error() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn twin_error_cpds_are_normalized(params in params_strategy(), rate in 0.0_f64..=1.0) {
        let base = build_causal_cpds(&params).unwrap();
        let model = build_twin_error_model(twin_error_edges(), &base, rate)
            .unwrap();
        for cpd in model.cpds().iter() {
            prop_assert!(cpd.max_normalization_error() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn zero_error_matches_causal_model(params in params_strategy()) {
        let causal = build_causal_model(&params).unwrap();
        let base = build_causal_cpds(&params).unwrap();
        let twin = build_twin_error_model(twin_error_edges(), &base, 0.0)
            .unwrap();

        let truth = causal.marginal(&Variable::CAUSAL).unwrap();
        let observed = twin.marginal(&Variable::OBSERVED).unwrap();
        for (p_true, p_obs) in truth.probabilities().iter().zip(observed.probabilities()) {
            prop_assert!((p_true - p_obs).abs() < 1e-6);
        }
    }
}

proptest! {
    #[test]
    fn no_confounding_preserves_potential_outcomes(drawn in params_strategy()) {
        let params = CausalParams { confounding_strength: 0.0, ..drawn };
        let cpds = build_causal_cpds(&params).unwrap();
        let y = cpds.require(Variable::Y).unwrap();
        for c in 0..2u8 {
            prop_assert!((y.probability(1, &[0, c]) - params.po_y_0).abs() < 1e-12);
            prop_assert!((y.probability(1, &[1, c]) - params.po_y_1).abs() < 1e-12);
        }
    }
}

proptest! {
    #[test]
    fn full_error_observes_twin(params in params_strategy()) {
        let base = build_causal_cpds(&params).unwrap();
        let model = build_twin_error_model(twin_error_edges(), &base, 1.0)
            .unwrap();
        for observed in Variable::OBSERVED {
            let (twin, _) = observed.sources().unwrap();
            let joint = model.marginal(&[observed, twin]).unwrap();
            prop_assert!(joint.probability(&[0, 1]).unwrap() < 1e-12);
            prop_assert!(joint.probability(&[1, 0]).unwrap() < 1e-12);
        }
    }
}
