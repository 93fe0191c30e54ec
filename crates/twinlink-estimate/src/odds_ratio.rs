//! Odds ratio of two outcome probabilities.

use twinlink_core::errors::EstimationError;

/// `y1·(1 − y0) / ((1 − y1)·y0)`.
///
/// IEEE semantics: `y0 = 0` or `y1 = 1` gives an infinite or NaN result,
/// which is returned as is.
pub fn compute_or(y0: f64, y1: f64) -> f64 {
    y1 * (1.0 - y0) / ((1.0 - y1) * y0)
}

/// [`compute_or`], failing with `DegenerateEstimate` when the result is not finite.
pub fn checked_odds_ratio(y0: f64, y1: f64) -> Result<f64, EstimationError> {
    let or = compute_or(y0, y1);
    if or.is_finite() {
        Ok(or)
    } else {
        Err(EstimationError::DegenerateEstimate { y0, y1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statins_odds_ratio() {
        let or = compute_or(0.03, 0.024);
        assert!((0.79..=0.80).contains(&or), "got {or}");
    }

    #[test]
    fn test_equal_probabilities_give_one() {
        assert!((compute_or(0.3, 0.3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_propagate() {
        assert!(compute_or(0.0, 0.5).is_infinite());
        assert!(compute_or(0.5, 1.0).is_infinite());
        assert!(compute_or(0.0, 0.0).is_nan());
        assert_eq!(compute_or(0.5, 0.0), 0.0);
    }

    #[test]
    fn test_checked_flags_degenerate() {
        assert_eq!(
            checked_odds_ratio(0.0, 0.2).unwrap_err(),
            EstimationError::DegenerateEstimate { y0: 0.0, y1: 0.2 }
        );
        assert!(checked_odds_ratio(f64::NAN, 0.2).is_err());
        assert!((checked_odds_ratio(0.5, 0.75).unwrap() - 3.0).abs() < 1e-12);
    }
}
