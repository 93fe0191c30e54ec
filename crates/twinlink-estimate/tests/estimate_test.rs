//! End-to-end tests for the IPW estimator and odds ratio.

use proptest::prelude::*;

use twinlink_core::config::EstimatorConfig;
use twinlink_core::errors::EstimationError;
use twinlink_core::SampleTable;
use twinlink_estimate::{checked_odds_ratio, compute_or, ipw, FitOptions, IpwEstimator};

fn reference_table(treatment: &str, outcome: &str, confounder: &str) -> SampleTable {
    SampleTable::from_columns(vec![
        (treatment, vec![0, 0, 0, 1, 1, 1]),
        (confounder, vec![0, 1, 1, 0, 0, 1]),
        (outcome, vec![1, 0, 0, 0, 1, 1]),
    ])
    .unwrap()
}

#[test]
fn reference_table_potential_outcomes() {
    let po = ipw(&reference_table("A", "Y", "C"), "A", "Y", &["C"])
        .unwrap();
    assert!((po.y0 - 0.5).abs() < 1e-6);
    assert!((po.y1 - 0.75).abs() < 1e-6);
}

#[test]
fn estimator_reads_configured_columns() {
    let config = EstimatorConfig::default();
    let table = reference_table("A_obs", "Y_obs", "C_obs");
    let estimator = IpwEstimator::from_config(&config);
    assert_eq!(estimator.treatment(), "A_obs");
    let po = estimator.estimate(&table).unwrap();
    assert!((po.y1 - 0.75).abs() < 1e-6);
}

#[test]
fn iteration_cap_is_honored() {
    let table = reference_table("A", "Y", "C");
    let estimator = IpwEstimator::new("A", "Y", &["C"]).with_options(FitOptions {
        max_iterations: 1,
        tolerance: 1e-8,
    });
    assert_eq!(
        estimator.estimate(&table).unwrap_err(),
        EstimationError::NotConverged { iterations: 1 }
    );
}

#[test]
fn statins_true_odds_ratio() {
    let or = compute_or(0.03, 0.024);
    assert!((or - 0.795).abs() < 1e-3);
}

// Balanced designs: every (treatment, confounder) cell is populated.
fn balanced_table() -> impl Strategy<Value = SampleTable> {
    prop::collection::vec((0u8..2, 0u8..2), 8..60).prop_map(|rows| {
        let mut a = vec![0, 0, 1, 1];
        let mut c = vec![0, 1, 0, 1];
        let mut y = vec![0, 1, 1, 0];
        for (i, (ci, yi)) in rows.into_iter().enumerate() {
            a.push((i % 2) as u8);
            c.push(ci);
            y.push(yi);
        }
        SampleTable::from_columns(vec![("A", a), ("C", c), ("Y", y)])
            .unwrap()
    })
}

proptest! {
    #[test]
    fn potential_outcomes_are_probabilities(table in balanced_table()) {
        let po = ipw(&table, "A", "Y", &["C"]).unwrap();
        prop_assert!((0.0..=1.0).contains(&po.y0));
        prop_assert!((0.0..=1.0).contains(&po.y1));
        if po.y0 > 0.0 && po.y1 < 1.0 {
            prop_assert!(checked_odds_ratio(po.y0, po.y1).is_ok());
        }
    }
}
