//! Monte Carlo driver.
//!
//! The causal CPDs are built once per run and one twin-error model per
//! configured error rate. Every (cell, replicate) job then samples from its
//! cell's model with its own seeded RNG and runs IPW on the sample. Jobs run
//! on a rayon pool; results are sorted by (cell, replicate) afterwards.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use twinlink_core::errors::{EstimationError, ModelError, StudyError, TwinlinkErrorCode};
use twinlink_core::tracing::events;
use twinlink_core::StudyConfig;
use twinlink_estimate::{compute_or, IpwEstimator};
use twinlink_model::{build_causal_cpds, twin_error_edges, BayesianModel, TwinErrorAssembler};

use crate::grid::{GridCell, ParameterGrid};
use crate::record::{CellFailure, StudyRecord};
use crate::report::{write_records_csv, write_summary_json};
use crate::seed::replicate_seed;
use crate::summary::{summarize, CellSummary};

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyReport {
    /// Base seed the replicate seeds were derived from.
    pub seed: u64,
    pub true_odds_ratio: f64,
    pub records: Vec<StudyRecord>,
    pub failures: Vec<CellFailure>,
    pub summaries: Vec<CellSummary>,
}

pub struct StudyDriver {
    config: StudyConfig,
}

impl StudyDriver {
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Run every cell and replicate.
    ///
    /// Invalid DGP parameters abort the run. An error rate whose model cannot
    /// be built turns each of its cells into a recorded failure.
    pub fn run(&self) -> Result<StudyReport, StudyError> {
        let start = Instant::now();
        let run = &self.config.run;
        let dgp = &self.config.dgp;

        let base = build_causal_cpds(dgp)?;
        let true_odds_ratio = compute_or(dgp.po_y_0, dgp.po_y_1);
        let seed = run.seed.unwrap_or_else(rand::random);

        let grid = ParameterGrid::from_config(&self.config.grid);
        let models: Vec<Result<BayesianModel, ModelError>> = grid
            .error_rates()
            .iter()
            .map(|&rate| {
                TwinErrorAssembler::new(rate)
                    .with_covariate(run.covariate)
                    .assemble(twin_error_edges(), &base)
            })
            .collect();

        let cells = grid.cells();
        let mut failures = Vec::new();
        let mut jobs = Vec::new();
        for cell in &cells {
            match &models[cell.error_index] {
                Ok(model) => {
                    for replicate in 0..run.bootstraps {
                        jobs.push((*cell, model, replicate));
                    }
                }
                Err(e) => {
                    events::cell_skipped(
                        cell.error_rate,
                        cell.recall_rate,
                        e.error_code(),
                        &e.to_string(),
                    );
                    failures.push(CellFailure {
                        cell: cell.index,
                        error_rate: cell.error_rate,
                        recall_rate: cell.recall_rate,
                        replicate: None,
                        code: e.error_code().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let estimator = IpwEstimator::from_config(&self.config.estimator);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(run.threads)
            .build()
            .map_err(|e| StudyError::ThreadPool {
                message: e.to_string(),
            })?;

        let outcomes: Vec<Result<StudyRecord, CellFailure>> = pool.install(|| {
            jobs.par_iter()
                .map(|&(cell, model, replicate)| {
                    self.run_replicate(model, &estimator, cell, replicate, seed, true_odds_ratio)
                })
                .collect()
        });

        let mut records = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(failure) => failures.push(failure),
            }
        }
        records.sort_by_key(StudyRecord::sort_key);
        failures.sort_by_key(CellFailure::sort_key);

        let summaries = summarize(&cells, run.sample_size, &records, &failures);
        events::study_completed(records.len(), failures.len(), start.elapsed().as_millis());

        Ok(StudyReport {
            seed,
            true_odds_ratio,
            records,
            failures,
            summaries,
        })
    }

    /// Run and write `b{bootstraps}_n{sample_size}.csv` plus its JSON summary
    /// into the configured output directory.
    pub fn run_and_report(&self) -> Result<StudyReport, StudyError> {
        let report = self.run()?;
        let output = &self.config.output;
        let (b, n) = (self.config.run.bootstraps, self.config.run.sample_size);
        write_records_csv(&output.records_path(b, n), &report.records)?;
        write_summary_json(&output.summary_path(b, n), &report.summaries)?;
        Ok(report)
    }

    fn run_replicate(
        &self,
        model: &BayesianModel,
        estimator: &IpwEstimator,
        cell: GridCell,
        replicate: usize,
        seed: u64,
        true_odds_ratio: f64,
    ) -> Result<StudyRecord, CellFailure> {
        let run = &self.config.run;
        let n_samples = cell.n_samples(run.sample_size);
        let mut rng = StdRng::seed_from_u64(replicate_seed(seed, cell.index, replicate));

        let estimate = model
            .simulate(n_samples, &mut rng)
            .map_err(EstimationError::from)
            .and_then(|table| estimator.estimate(&table));
        let outcomes = match estimate {
            Ok(po) => po,
            Err(e) => {
                events::replicate_failed(
                    cell.error_rate,
                    cell.recall_rate,
                    replicate,
                    e.error_code(),
                    &e.to_string(),
                );
                return Err(CellFailure {
                    cell: cell.index,
                    error_rate: cell.error_rate,
                    recall_rate: cell.recall_rate,
                    replicate: Some(replicate),
                    code: e.error_code().to_string(),
                    message: e.to_string(),
                });
            }
        };

        let odds_ratio = outcomes.odds_ratio();
        let degenerate = outcomes.checked_odds_ratio().is_err();
        if degenerate {
            events::replicate_degenerate(
                cell.error_rate,
                cell.recall_rate,
                replicate,
                outcomes.y0,
                outcomes.y1,
            );
        }

        Ok(StudyRecord {
            bootstraps: run.bootstraps,
            sample_size: run.sample_size,
            error_rate: cell.error_rate,
            recall_rate: cell.recall_rate,
            cell: cell.index,
            replicate,
            n_samples,
            est_odds_ratio: odds_ratio,
            est_y0: outcomes.y0,
            est_y1: outcomes.y1,
            true_odds_ratio,
            bias: odds_ratio - true_odds_ratio,
            degenerate,
        })
    }
}
