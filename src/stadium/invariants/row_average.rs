//! Row average weight never exceeds the limit.

use super::super::roster::Roster;
use super::Invariant;

/// Invariant: each row's total is at most `MAX_ROW_WEIGHT * row size`.
pub struct RowAverageWithinLimit;

impl Invariant<Roster> for RowAverageWithinLimit {
    fn holds(roster: &Roster) -> bool {
        (0..roster.row_count()).all(|row| roster.row_total(row) <= roster.row_limit(row))
    }

    fn description() -> &'static str {
        "Row averages stay within the weight limit"
    }
}
