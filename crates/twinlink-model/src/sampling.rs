//! Forward (ancestral) sampling.

use rand::Rng;
use twinlink_core::errors::DataError;
use twinlink_core::SampleTable;

use crate::network::BayesianModel;
use crate::variable::Variable;

impl BayesianModel {
    /// Draw `n` independent rows from the joint distribution.
    ///
    /// Nodes are visited in topological order; each value is 1 when a
    /// uniform draw falls below P(V = 1 | parents). The table has one column
    /// per node, named by [`Variable::name`], in declaration order.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<SampleTable, DataError> {
        let variables = self.variables();
        let mut columns: Vec<Vec<u8>> = vec![Vec::with_capacity(n); Variable::COUNT];
        let mut states = [0u8; Variable::COUNT];

        for _ in 0..n {
            for &variable in self.topological_order() {
                let p_one = self
                    .cpd(variable)
                    .and_then(|cpd| cpd.column(cpd.column_of(|e| states[e.index()])))
                    .map(|c| c[1])
                    .unwrap_or(0.0);
                let value = u8::from(rng.gen::<f64>() < p_one);
                states[variable.index()] = value;
                columns[variable.index()].push(value);
            }
        }

        SampleTable::from_columns(
            variables
                .into_iter()
                .map(|v| (v.name(), std::mem::take(&mut columns[v.index()]))),
        )
    }
}
