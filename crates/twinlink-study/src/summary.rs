//! Per-cell aggregates over replicates.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::grid::GridCell;
use crate::record::{CellFailure, StudyRecord};

/// Aggregate of one grid cell. Odds-ratio statistics cover non-degenerate
/// replicates only and are `None` when fewer than needed are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSummary {
    pub error_rate: f64,
    pub recall_rate: f64,
    pub n_samples: usize,
    /// Replicates that produced an estimate.
    pub replicates: usize,
    pub degenerate: usize,
    pub failures: usize,
    pub mean_odds_ratio: Option<f64>,
    /// Sample standard deviation; needs at least two replicates.
    pub std_dev_odds_ratio: Option<f64>,
    pub mean_bias: Option<f64>,
}

/// One summary per grid cell, in cell order.
pub fn summarize(
    cells: &[GridCell],
    sample_size: usize,
    records: &[StudyRecord],
    failures: &[CellFailure],
) -> Vec<CellSummary> {
    cells
        .iter()
        .map(|cell| {
            let in_cell: Vec<&StudyRecord> =
                records.iter().filter(|r| r.cell == cell.index).collect();
            let usable: Vec<&StudyRecord> =
                in_cell.iter().copied().filter(|r| !r.degenerate).collect();
            let odds: Vec<f64> = usable.iter().map(|r| r.est_odds_ratio).collect();
            let bias: Vec<f64> = usable.iter().map(|r| r.bias).collect();

            CellSummary {
                error_rate: cell.error_rate,
                recall_rate: cell.recall_rate,
                n_samples: cell.n_samples(sample_size),
                replicates: in_cell.len(),
                degenerate: in_cell.len() - usable.len(),
                failures: failures.iter().filter(|f| f.cell == cell.index).count(),
                mean_odds_ratio: (!odds.is_empty()).then(|| odds.iter().mean()),
                std_dev_odds_ratio: (odds.len() > 1).then(|| odds.iter().std_dev()),
                mean_bias: (!bias.is_empty()).then(|| bias.iter().mean()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cell: usize, replicate: usize, or: f64, degenerate: bool) -> StudyRecord {
        StudyRecord {
            bootstraps: 3,
            sample_size: 100,
            error_rate: 0.01,
            recall_rate: 0.7,
            cell,
            replicate,
            n_samples: 70,
            est_odds_ratio: or,
            est_y0: 0.1,
            est_y1: 0.1,
            true_odds_ratio: 0.8,
            bias: or - 0.8,
            degenerate,
        }
    }

    fn cell(index: usize) -> GridCell {
        GridCell {
            index,
            error_index: 0,
            error_rate: 0.01,
            recall_rate: 0.7,
        }
    }

    #[test]
    fn test_statistics_skip_degenerate() {
        let records = vec![
            record(0, 0, 1.0, false),
            record(0, 1, 2.0, false),
            record(0, 2, f64::INFINITY, true),
        ];
        let summaries = summarize(&[cell(0)], 100, &records, &[]);
        let s = &summaries[0];
        assert_eq!(s.replicates, 3);
        assert_eq!(s.degenerate, 1);
        assert_eq!(s.n_samples, 70);
        assert!((s.mean_odds_ratio.unwrap() - 1.5).abs() < 1e-12);
        let std_dev = s.std_dev_odds_ratio.unwrap();
        assert!((std_dev - 0.5_f64.sqrt()).abs() < 1e-12);
        assert!((s.mean_bias.unwrap() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_empty_cell() {
        let failure = CellFailure {
            cell: 1,
            error_rate: 1.5,
            recall_rate: 0.7,
            replicate: None,
            code: "INVALID_PARAMETER".to_string(),
            message: "bad".to_string(),
        };
        let summaries = summarize(
            &[cell(0), cell(1)],
            100,
            &[record(0, 0, 1.0, false)],
            &[failure],
        );
        assert_eq!(summaries[1].replicates, 0);
        assert_eq!(summaries[1].failures, 1);
        assert_eq!(summaries[1].mean_odds_ratio, None);
        assert_eq!(summaries[0].std_dev_odds_ratio, None);
    }
}
