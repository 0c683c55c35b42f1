//! Roster-wide weight rules, checked after every add and remove.
//!
//! Each rule is a zero-sized type so the set a roster is checked against is
//! spelled out in [`RosterInvariants`].

mod row_average;
mod weights_in_range;

pub use row_average::RowAverageWithinLimit;
pub use weights_in_range::WeightsInRange;

use super::roster::Roster;

/// Rule over a whole state, such as every row staying under its weight limit.
pub trait Invariant<S> {
    /// Returns `true` when `state` obeys the rule.
    fn holds(state: &S) -> bool;

    /// Sentence naming the rule, used in violation reports.
    fn description() -> &'static str;
}

/// A rule the roster broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The broken rule, as given by [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Records a broken rule.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Rules evaluated in one pass over a state.
///
/// Implemented for pairs of rules.
pub trait InvariantSet<S> {
    /// Evaluates every rule and reports all that fail, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Weight rules every roster obeys between operator actions.
pub type RosterInvariants = (WeightsInRange, RowAverageWithinLimit);

/// Checks [`RosterInvariants`] and joins any violations into one message.
pub fn check_roster(roster: &Roster) -> Result<(), String> {
    RosterInvariants::check_all(roster).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysHolds;
    struct NeverHolds;

    impl Invariant<()> for AlwaysHolds {
        fn holds(_: &()) -> bool {
            true
        }
        fn description() -> &'static str {
            "always"
        }
    }

    impl Invariant<()> for NeverHolds {
        fn holds(_: &()) -> bool {
            false
        }
        fn description() -> &'static str {
            "never"
        }
    }

    #[test]
    fn test_pair_collects_only_failures() {
        assert!(<(AlwaysHolds, AlwaysHolds)>::check_all(&()).is_ok());

        let violations = <(AlwaysHolds, NeverHolds)>::check_all(&()).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new("never")]);
    }

    #[test]
    fn test_pair_reports_every_broken_rule() {
        let violations = <(NeverHolds, NeverHolds)>::check_all(&()).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.description == NeverHolds::description()));
    }

    #[test]
    fn test_fresh_roster_satisfies_all() {
        let roster = Roster::new(&[1, 8, 3]).unwrap();
        assert!(check_roster(&roster).is_ok());
    }
}
