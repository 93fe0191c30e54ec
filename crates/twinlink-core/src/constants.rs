//! Shared constants and compiled defaults for the twinlink study.

/// twinlink version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Data-generating process (statins / ischemic stroke preset) ----

/// Default confounding strength used by the study driver.
pub const DEFAULT_CONFOUNDING_STRENGTH: f64 = 0.2;

/// Default p(C = 0).
pub const DEFAULT_P_C: f64 = 0.5;

/// Default p(Y(a=1) = 1).
pub const DEFAULT_PO_Y_1: f64 = 0.024;

/// Default p(Y(a=0) = 1).
pub const DEFAULT_PO_Y_0: f64 = 0.03;

/// Default p(A = 1 | C = 0).
pub const DEFAULT_P_A1_C0: f64 = 0.2;

/// Default p(A = 1 | C = 1).
pub const DEFAULT_P_A1_C1: f64 = 0.3;

// ---- Parameter grid ----

/// Default match error rates, p(E = 1).
pub const DEFAULT_ERROR_RATES: [f64; 3] = [0.01, 0.02, 0.05];

/// Default recall rates (share of the nominal sample that gets linked).
pub const DEFAULT_RECALL_RATES: [f64; 3] = [0.7, 0.8, 0.9];

// ---- Run ----

/// Default number of bootstrap replicates per grid cell.
pub const DEFAULT_BOOTSTRAPS: usize = 5;

/// Default nominal sample size before recall is applied.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Default number of worker threads (0 = rayon default).
pub const DEFAULT_THREADS: usize = 0;

// ---- Estimator ----

/// Default treatment column.
pub const DEFAULT_TREATMENT: &str = "A_obs";

/// Default outcome column.
pub const DEFAULT_OUTCOME: &str = "Y_obs";

/// Default confounder column.
pub const DEFAULT_CONFOUNDER: &str = "C_obs";

/// Default IRLS iteration cap for the propensity model.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default IRLS convergence tolerance (max absolute coefficient update).
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

// ---- Output ----

/// Default output directory for study reports.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// ---- Numerics ----

/// Tolerance for CPD column normalization.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Every variable in the twin-error model is binary.
pub const BINARY_CARDINALITY: usize = 2;
