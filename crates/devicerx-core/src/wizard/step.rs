use serde::{Deserialize, Serialize};
use std::fmt;

/// A wizard step. Ordinals are significant: "completed" means the current
/// step's ordinal is greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Step {
    /// Welcome screen
    #[default]
    Landing,
    /// Device type selection
    Category,
    /// Symptom tags and description
    Symptoms,
    /// Device specifications
    Specs,
    /// Waiting for the model
    Analyzing,
    /// Diagnosis report
    Results,
    /// Upgrade recommendations
    Upgrades,
    /// Repair vs. replace comparison
    Summary,
    /// Operator dashboard, outside the linear sequence
    Admin,
}

impl Step {
    /// Every step, in ordinal order
    pub const ALL: [Step; 9] = [
        Step::Landing,
        Step::Category,
        Step::Symptoms,
        Step::Specs,
        Step::Analyzing,
        Step::Results,
        Step::Upgrades,
        Step::Summary,
        Step::Admin,
    ];

    /// Numeric identity of the step
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Landing => 0,
            Self::Category => 1,
            Self::Symptoms => 2,
            Self::Specs => 3,
            Self::Analyzing => 4,
            Self::Results => 5,
            Self::Upgrades => 6,
            Self::Summary => 7,
            Self::Admin => 99,
        }
    }

    /// Step with the given ordinal, `None` for unknown values
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    /// Display name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Category => "Category",
            Self::Symptoms => "Symptoms",
            Self::Specs => "Specs",
            Self::Analyzing => "Analyzing",
            Self::Results => "Results",
            Self::Upgrades => "Upgrades",
            Self::Summary => "Summary",
            Self::Admin => "Admin",
        }
    }

    /// Whether `target` counts as completed while at `self`
    #[must_use]
    pub fn is_completed_at(self, target: Step) -> bool {
        self.ordinal() > target.ordinal()
    }

    /// Step whose ordinal is `self + delta`, if any
    pub(crate) fn offset(self, delta: i32) -> Result<Step, i32> {
        let ordinal = i32::from(self.ordinal()) + delta;
        u8::try_from(ordinal)
            .ok()
            .and_then(Step::from_ordinal)
            .ok_or(ordinal)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label(), self.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_ordinal(step.ordinal()), Some(step));
        }
        assert_eq!(Step::from_ordinal(8), None);
        assert_eq!(Step::from_ordinal(42), None);
        assert_eq!(Step::Admin.ordinal(), 99);
    }

    #[test]
    fn test_is_completed_at() {
        assert!(Step::Specs.is_completed_at(Step::Category));
        assert!(!Step::Specs.is_completed_at(Step::Specs));
        assert!(!Step::Category.is_completed_at(Step::Results));
        assert!(Step::Admin.is_completed_at(Step::Results));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Step::Landing.offset(1), Ok(Step::Category));
        assert_eq!(Step::Summary.offset(-7), Ok(Step::Landing));
        assert_eq!(Step::Landing.offset(-1), Err(-1));
        assert_eq!(Step::Summary.offset(1), Err(8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Symptoms.to_string(), "Symptoms(2)");
        assert_eq!(Step::Admin.to_string(), "Admin(99)");
    }
}
