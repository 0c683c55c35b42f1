//! Every occupied slot holds a legal weight.

use super::super::limits::{MAX_WEIGHT, MIN_WEIGHT};
use super::super::roster::Roster;
use super::Invariant;

/// Invariant: occupied slots hold weights within `[MIN_WEIGHT, MAX_WEIGHT]`.
///
/// `Weight` already refuses out-of-range values, so
/// this only fails if that guarantee is bypassed.
pub struct WeightsInRange;

impl Invariant<Roster> for WeightsInRange {
    fn holds(roster: &Roster) -> bool {
        roster
            .rows()
            .iter()
            .flatten()
            .filter_map(|slot| slot.weight())
            .all(|w| (MIN_WEIGHT..=MAX_WEIGHT).contains(&w.value()))
    }

    fn description() -> &'static str {
        "Occupied slots hold weights within the allowed range"
    }
}
