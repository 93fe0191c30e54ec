//! How the observed baseline covariate reacts to a linkage error.

use serde::{Deserialize, Serialize};

/// Shape of the C_obs mixing table.
///
/// Under `Substituted` every observed field comes from the same record, so a
/// mismatch swaps in a twin with the same joint law and the observed joint
/// equals the true joint at every error rate. Only `Accurate` lets linkage
/// error bias the treatment effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CovariateHandling {
    /// C_obs follows the same gate as A_obs and Y_obs: C when E = 0, C1 when E = 1.
    #[default]
    Substituted,
    /// C_obs always copies C; the covariate is held by the analyst and never mismatched.
    Accurate,
}

impl CovariateHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substituted => "substituted",
            Self::Accurate => "accurate",
        }
    }
}

impl std::str::FromStr for CovariateHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substituted" => Ok(Self::Substituted),
            "accurate" => Ok(Self::Accurate),
            other => Err(format!(
                "unknown covariate handling '{other}' (expected 'substituted' or 'accurate')"
            )),
        }
    }
}

impl std::fmt::Display for CovariateHandling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
