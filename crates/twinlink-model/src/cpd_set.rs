//! A validated collection of CPDs keyed by variable.

use std::collections::BTreeMap;

use twinlink_core::errors::ModelError;

use crate::cpd::TabularCpd;
use crate::variable::Variable;

/// At most one CPD per variable. Insertions and merges never overwrite:
/// a second CPD for the same variable is a `StructuralMismatch`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpdSet {
    cpds: BTreeMap<Variable, TabularCpd>,
}

impl CpdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect CPDs, failing on the first duplicate variable.
    pub fn from_cpds<I>(cpds: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = TabularCpd>,
    {
        let mut set = Self::new();
        for cpd in cpds {
            set.insert(cpd)?;
        }
        Ok(set)
    }

    /// Add a CPD. Fails if the variable already has one.
    pub fn insert(&mut self, cpd: TabularCpd) -> Result<(), ModelError> {
        let variable = cpd.variable();
        if self.cpds.contains_key(&variable) {
            return Err(ModelError::mismatch(format!(
                "duplicate CPD for {variable}"
            )));
        }
        self.cpds.insert(variable, cpd);
        Ok(())
    }

    /// Union of two disjoint sets. Any shared variable is a `StructuralMismatch`.
    pub fn merge(mut self, other: CpdSet) -> Result<CpdSet, ModelError> {
        for cpd in other.cpds.into_values() {
            self.insert(cpd)?;
        }
        Ok(self)
    }

    pub fn get(&self, variable: Variable) -> Option<&TabularCpd> {
        self.cpds.get(&variable)
    }

    /// Look up a CPD, failing with `StructuralMismatch` when it is missing.
    pub fn require(&self, variable: Variable) -> Result<&TabularCpd, ModelError> {
        self.get(variable).ok_or_else(|| {
            ModelError::mismatch(format!("missing CPD for {variable}"))
        })
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.cpds.contains_key(&variable)
    }

    /// Variables with a CPD, in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.cpds.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabularCpd> {
        self.cpds.values()
    }

    pub fn len(&self) -> usize {
        self.cpds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marginal(v: Variable) -> TabularCpd {
        TabularCpd::marginal(v, 0.5).unwrap()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = CpdSet::new();
        set.insert(marginal(Variable::C)).unwrap();
        let err = set.insert(marginal(Variable::C)).unwrap_err();
        assert_eq!(err, ModelError::mismatch("duplicate CPD for C"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge_disjoint_and_colliding() {
        let left = CpdSet::from_cpds([marginal(Variable::C), marginal(Variable::E)])
            .unwrap();
        let right = CpdSet::from_cpds([marginal(Variable::C1)]).unwrap();
        let merged = left.clone().merge(right).unwrap();
        assert_eq!(
            merged.variables().collect::<Vec<_>>(),
            vec![Variable::C, Variable::C1, Variable::E]
        );

        let clash = CpdSet::from_cpds([marginal(Variable::E)]).unwrap();
        assert!(matches!(
            left.merge(clash),
            Err(ModelError::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn test_require_missing() {
        let set = CpdSet::new();
        assert!(set.is_empty());
        assert_eq!(
            set.require(Variable::Y).unwrap_err(),
            ModelError::mismatch("missing CPD for Y")
        );
    }
}
