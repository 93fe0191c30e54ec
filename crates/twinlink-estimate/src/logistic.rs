//! Logistic regression fit by iteratively reweighted least squares.

use twinlink_core::config::EstimatorConfig;
use twinlink_core::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use twinlink_core::errors::{DataError, EstimationError};

/// Pivots smaller than this are treated as a singular Hessian.
const PIVOT_EPSILON: f64 = 1e-12;

/// Newton–Raphson stopping rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub max_iterations: usize,
    /// Stop once the largest absolute coefficient update falls below this.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl From<&EstimatorConfig> for FitOptions {
    fn from(config: &EstimatorConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

/// A fitted model P(y = 1 | x) = σ(β₀ + Σ βⱼ xⱼ).
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    /// Intercept first, then one coefficient per predictor column.
    coefficients: Vec<f64>,
    iterations: usize,
}

impl LogisticRegression {
    /// Fit an intercept plus one coefficient per column of `x_columns`.
    pub fn fit(
        x_columns: &[&[u8]],
        y: &[u8],
        options: &FitOptions,
    ) -> Result<Self, EstimationError> {
        let n = y.len();
        if n == 0 {
            return Err(EstimationError::EmptySample);
        }
        check_lengths(x_columns, n)?;

        let p = x_columns.len() + 1;
        let design: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                std::iter::once(1.0)
                    .chain(x_columns.iter().map(|c| f64::from(c[i])))
                    .collect()
            })
            .collect();

        let mut beta = vec![0.0; p];
        for iteration in 0..options.max_iterations {
            let mut gradient = vec![0.0; p];
            let mut hessian = vec![vec![0.0; p]; p];

            for (row, &target) in design.iter().zip(y) {
                let mu = sigmoid(dot(row, &beta));
                let w = mu * (1.0 - mu);
                let residual = f64::from(target) - mu;
                for a in 0..p {
                    gradient[a] += row[a] * residual;
                    for b in 0..p {
                        hessian[a][b] += w * row[a] * row[b];
                    }
                }
            }

            let step = solve(hessian, gradient)
                .ok_or(EstimationError::SingularDesign { iteration })?;
            let max_update = step.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
            for (b, d) in beta.iter_mut().zip(&step) {
                *b += d;
            }

            if !max_update.is_finite() {
                return Err(EstimationError::SingularDesign { iteration });
            }
            if max_update < options.tolerance {
                tracing::trace!(iterations = iteration + 1, "logistic fit converged");
                return Ok(Self {
                    coefficients: beta,
                    iterations: iteration + 1,
                });
            }
        }

        Err(EstimationError::NotConverged {
            iterations: options.max_iterations,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Newton steps taken until convergence.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// P(y = 1 | x) for one row of predictor values (without the intercept).
    pub fn predict_one(&self, x: &[u8]) -> f64 {
        let eta = self.coefficients[0]
            + self.coefficients[1..]
                .iter()
                .zip(x)
                .map(|(b, v)| b * f64::from(*v))
                .sum::<f64>();
        sigmoid(eta)
    }

    /// Fitted probabilities for `n_rows` rows of `x_columns`.
    ///
    /// Every column must hold exactly `n_rows` values.
    pub fn predict(&self, x_columns: &[&[u8]], n_rows: usize) -> Result<Vec<f64>, DataError> {
        check_lengths(x_columns, n_rows)?;
        let mut row = vec![0u8; x_columns.len()];
        Ok((0..n_rows)
            .map(|i| {
                for (slot, column) in row.iter_mut().zip(x_columns) {
                    *slot = column[i];
                }
                self.predict_one(&row)
            })
            .collect())
    }
}

fn check_lengths(x_columns: &[&[u8]], n: usize) -> Result<(), DataError> {
    for (j, column) in x_columns.iter().enumerate() {
        if column.len() != n {
            return Err(DataError::LengthMismatch {
                name: format!("x{j}"),
                expected: n,
                actual: column.len(),
            });
        }
    }
    Ok(())
}

fn sigmoid(eta: f64) -> f64 {
    1.0 / (1.0 + (-eta).exp())
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturated_model_recovers_cell_proportions() {
        let c: &[u8] = &[0, 1, 1, 0, 0, 1];
        let a: &[u8] = &[0, 0, 0, 1, 1, 1];
        let model = LogisticRegression::fit(&[c], a, &FitOptions::default())
            .unwrap();
        assert!((model.predict_one(&[0]) - 2.0 / 3.0).abs() < 1e-9);
        assert!((model.predict_one(&[1]) - 1.0 / 3.0).abs() < 1e-9);
        assert!((model.intercept() - 2.0_f64.ln()).abs() < 1e-9);
        assert!(model.iterations() < 20);
    }

    #[test]
    fn test_intercept_only() {
        let y: &[u8] = &[1, 0, 0, 0];
        let model = LogisticRegression::fit(&[], y, &FitOptions::default())
            .unwrap();
        assert!((model.predict_one(&[]) - 0.25).abs() < 1e-9);
        assert_eq!(model.coefficients().len(), 1);
    }

    #[test]
    fn test_constant_predictor_is_singular() {
        let c: &[u8] = &[1, 1, 1, 1];
        let y: &[u8] = &[0, 1, 0, 1];
        let err = LogisticRegression::fit(&[c], y, &FitOptions::default())
            .unwrap_err();
        assert_eq!(err, EstimationError::SingularDesign { iteration: 0 });
    }

    #[test]
    fn test_separation_does_not_converge() {
        let c: &[u8] = &[0, 0, 1, 1];
        let y: &[u8] = &[0, 0, 1, 1];
        let options = FitOptions {
            max_iterations: 5,
            tolerance: 1e-8,
        };
        let err = LogisticRegression::fit(&[c], y, &options).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::NotConverged { iterations: 5 } | EstimationError::SingularDesign { .. }
        ));
    }

    #[test]
    fn test_rejects_empty_and_ragged_input() {
        let empty: &[u8] = &[];
        let defaults = FitOptions::default();
        assert_eq!(
            LogisticRegression::fit(&[], empty, &defaults).unwrap_err(),
            EstimationError::EmptySample
        );
        let c: &[u8] = &[0, 1];
        let y: &[u8] = &[0, 1, 1];
        assert!(matches!(
            LogisticRegression::fit(&[c], y, &FitOptions::default()),
            Err(EstimationError::Data(DataError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_predict_rejects_short_columns() {
        let c: &[u8] = &[0, 1, 1, 0, 0, 1];
        let a: &[u8] = &[0, 0, 0, 1, 1, 1];
        let model = LogisticRegression::fit(&[c], a, &FitOptions::default())
            .unwrap();

        assert_eq!(model.predict(&[c], 6).unwrap().len(), 6);
        assert_eq!(
            model.predict(&[c], 8).unwrap_err(),
            DataError::LengthMismatch {
                name: "x0".to_string(),
                expected: 8,
                actual: 6,
            }
        );
    }

    #[test]
    fn test_solve_small_system() {
        let x = solve(vec![vec![0.0, 2.0], vec![1.0, 1.0]], vec![4.0, 3.0])
            .unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        let singular = solve(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![1.0, 2.0]);
        assert!(singular.is_none());
    }
}
