//! Column-major table of binary samples.

use std::collections::HashSet;

use crate::errors::DataError;

/// A sampled dataset: one named column per variable, one row per draw,
/// every value in {0, 1}.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleTable {
    names: Vec<String>,
    columns: Vec<Vec<u8>>,
    rows: usize,
}

impl SampleTable {
    /// Build a table from `(name, values)` pairs.
    ///
    /// Rejects duplicate names, ragged columns, and non-binary values.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        let mut seen = HashSet::new();

        for (idx, (name, values)) in columns.into_iter().enumerate() {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(DataError::DuplicateColumn { name });
            }
            if idx == 0 {
                table.rows = values.len();
            } else if values.len() != table.rows {
                return Err(DataError::LengthMismatch {
                    name,
                    expected: table.rows,
                    actual: values.len(),
                });
            }
            if let Some((row, &value)) = values.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(DataError::NonBinaryValue { name, row, value });
            }
            table.names.push(name);
            table.columns.push(values);
        }

        Ok(table)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[u8]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Look up a column by name, failing with `MissingColumn`.
    pub fn require(&self, name: &str) -> Result<&[u8], DataError> {
        self.column(name).ok_or_else(|| DataError::MissingColumn {
            name: name.to_string(),
        })
    }

    /// Project onto the named columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<SampleTable, DataError> {
        let mut projected = Vec::with_capacity(names.len());
        for name in names {
            projected.push((name.to_string(), self.require(name)?.to_vec()));
        }
        SampleTable::from_columns(projected)
    }

    /// Share of ones in a column. `None` for an empty table.
    pub fn proportion(&self, name: &str) -> Result<Option<f64>, DataError> {
        let column = self.require(name)?;
        if column.is_empty() {
            return Ok(None);
        }
        let ones = column.iter().filter(|v| **v == 1).count();
        Ok(Some(ones as f64 / column.len() as f64))
    }
}
