//! Parameters of the baseline causal process C → A → Y, C → Y.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Population-level parameters of the un-erred causal model.
///
/// Defaults reproduce the statins / ischemic stroke study in Type 2
/// diabetes (A: statin usage, Y: stroke, C: sex), whose causal odds ratio
/// is about 0.8.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalParams {
    /// Multiplicative deviation of p(Y | A, C) from the potential outcomes.
    pub confounding_strength: f64,
    /// p(C = 0).
    pub p_c: f64,
    /// p(Y(a=1) = 1).
    pub po_y_1: f64,
    /// p(Y(a=0) = 1).
    pub po_y_0: f64,
    /// p(A = 1 | C = 0).
    pub p_a1_c0: f64,
    /// p(A = 1 | C = 1).
    pub p_a1_c1: f64,
}

impl CausalParams {
    /// Study preset with the given confounding strength.
    pub fn new(confounding_strength: f64) -> Self {
        Self {
            confounding_strength,
            ..Self::default()
        }
    }

    /// Named probability inputs, in declaration order.
    pub fn probabilities(&self) -> [(&'static str, f64); 5] {
        [
            ("p_c", self.p_c),
            ("po_y_1", self.po_y_1),
            ("po_y_0", self.po_y_0),
            ("p_a1_c0", self.p_a1_c0),
            ("p_a1_c1", self.p_a1_c1),
        ]
    }
}

impl Default for CausalParams {
    fn default() -> Self {
        Self {
            confounding_strength: constants::DEFAULT_CONFOUNDING_STRENGTH,
            p_c: constants::DEFAULT_P_C,
            po_y_1: constants::DEFAULT_PO_Y_1,
            po_y_0: constants::DEFAULT_PO_Y_0,
            p_a1_c0: constants::DEFAULT_P_A1_C0,
            p_a1_c1: constants::DEFAULT_P_A1_C1,
        }
    }
}
