//! The ten binary variables of the twin-error model.

/// Role of a variable in the twin-error template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Part of the true record (C, A, Y).
    True,
    /// Part of the independent twin record (C1, A1, Y1).
    Twin,
    /// The match error indicator E.
    ErrorIndicator,
    /// What the analyst sees (C_obs, A_obs, Y_obs).
    Observed,
}

/// A named binary random variable. Values are 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Baseline covariate.
    C,
    /// Treatment.
    A,
    /// Outcome.
    Y,
    C1,
    A1,
    Y1,
    /// Match error indicator.
    E,
    CObs,
    AObs,
    YObs,
}

impl Variable {
    /// Total number of variables.
    pub const COUNT: usize = 10;

    /// All variables, in declaration order.
    pub const ALL: [Variable; 10] = [
        Self::C,
        Self::A,
        Self::Y,
        Self::C1,
        Self::A1,
        Self::Y1,
        Self::E,
        Self::CObs,
        Self::AObs,
        Self::YObs,
    ];

    /// The true causal triple.
    pub const CAUSAL: [Variable; 3] = [Self::C, Self::A, Self::Y];

    /// The observed triple, aligned with [`Self::CAUSAL`].
    pub const OBSERVED: [Variable; 3] = [Self::CObs, Self::AObs, Self::YObs];

    /// Dense index in `0..COUNT`, matching [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name used in sampled tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::A => "A",
            Self::Y => "Y",
            Self::C1 => "C1",
            Self::A1 => "A1",
            Self::Y1 => "Y1",
            Self::E => "E",
            Self::CObs => "C_obs",
            Self::AObs => "A_obs",
            Self::YObs => "Y_obs",
        }
    }

    /// Parse a column name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    pub fn role(&self) -> Role {
        match self {
            Self::C | Self::A | Self::Y => Role::True,
            Self::C1 | Self::A1 | Self::Y1 => Role::Twin,
            Self::E => Role::ErrorIndicator,
            Self::CObs | Self::AObs | Self::YObs => Role::Observed,
        }
    }

    /// The twin of a true variable (C → C1, A → A1, Y → Y1).
    pub fn twin(&self) -> Option<Variable> {
        match self {
            Self::C => Some(Self::C1),
            Self::A => Some(Self::A1),
            Self::Y => Some(Self::Y1),
            _ => None,
        }
    }

    /// The observed counterpart of a true variable (C → C_obs, ...).
    pub fn observed(&self) -> Option<Variable> {
        match self {
            Self::C => Some(Self::CObs),
            Self::A => Some(Self::AObs),
            Self::Y => Some(Self::YObs),
            _ => None,
        }
    }

    /// For an observed variable, the `(twin, true)` pair its gate selects between.
    pub fn sources(&self) -> Option<(Variable, Variable)> {
        match self {
            Self::CObs => Some((Self::C1, Self::C)),
            Self::AObs => Some((Self::A1, Self::A)),
            Self::YObs => Some((Self::Y1, Self::Y)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, v) in Variable::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for v in Variable::ALL {
            assert_eq!(Variable::from_name(v.name()), Some(v));
        }
        assert_eq!(Variable::from_name("C_true"), None);
        assert_eq!(Variable::from_name("c"), None);
    }

    #[test]
    fn test_twin_and_observed_alignment() {
        for (truth, obs) in Variable::CAUSAL.iter().zip(Variable::OBSERVED.iter()) {
            let twin = truth.twin().unwrap();
            assert_eq!(truth.observed(), Some(*obs));
            assert_eq!(obs.sources(), Some((twin, *truth)));
            assert_eq!(twin.role(), Role::Twin);
        }
        assert_eq!(Variable::E.twin(), None);
        assert_eq!(Variable::E.role(), Role::ErrorIndicator);
    }
}
