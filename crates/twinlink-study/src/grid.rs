//! The error-rate × recall-rate grid.

use twinlink_core::config::GridConfig;

/// One (error rate, recall rate) combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Position in [`ParameterGrid::cells`].
    pub index: usize,
    /// Position of `error_rate` in the configured error-rate list.
    pub error_index: usize,
    pub error_rate: f64,
    pub recall_rate: f64,
}

impl GridCell {
    /// Rows drawn per replicate: ⌊recall_rate × sample_size⌋.
    pub fn n_samples(&self, sample_size: usize) -> usize {
        (self.recall_rate * sample_size as f64).floor() as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    error_rates: Vec<f64>,
    recall_rates: Vec<f64>,
}

impl ParameterGrid {
    pub fn new(error_rates: Vec<f64>, recall_rates: Vec<f64>) -> Self {
        Self {
            error_rates,
            recall_rates,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.error_rates.clone(), config.recall_rates.clone())
    }

    pub fn error_rates(&self) -> &[f64] {
        &self.error_rates
    }

    pub fn recall_rates(&self) -> &[f64] {
        &self.recall_rates
    }

    /// Cartesian product, error rate varying slowest.
    pub fn cells(&self) -> Vec<GridCell> {
        self.error_rates
            .iter()
            .enumerate()
            .flat_map(|(error_index, &error_rate)| {
                self.recall_rates
                    .iter()
                    .map(move |&recall_rate| (error_index, error_rate, recall_rate))
            })
            .enumerate()
            .map(|(index, (error_index, error_rate, recall_rate))| GridCell {
                index,
                error_index,
                error_rate,
                recall_rate,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.error_rates.len() * self.recall_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_rate_varies_slowest() {
        let grid = ParameterGrid::new(vec![0.01, 0.05], vec![0.7, 0.8, 0.9]);
        let cells = grid.cells();
        assert_eq!(cells.len(), grid.len());
        let pairs: Vec<(f64, f64)> = cells
            .iter()
            .map(|c| (c.error_rate, c.recall_rate))
            .collect();
        assert_eq!(
            pairs,
            vec![(0.01, 0.7), (0.01, 0.8), (0.01, 0.9), (0.05, 0.7), (0.05, 0.8), (0.05, 0.9)]
        );
        assert_eq!(cells[4].index, 4);
        assert_eq!(cells[4].error_index, 1);
    }

    #[test]
    fn test_n_samples_floors() {
        let cell = GridCell {
            index: 0,
            error_index: 0,
            error_rate: 0.01,
            recall_rate: 0.7,
        };
        assert_eq!(cell.n_samples(100), 70);
        assert_eq!(cell.n_samples(15), 10);
        assert_eq!(cell.n_samples(1), 0);
    }

    #[test]
    fn test_default_grid() {
        let grid = ParameterGrid::from_config(&GridConfig::default());
        assert_eq!(grid.len(), 9);
        assert!(!grid.is_empty());
    }
}
