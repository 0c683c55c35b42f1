//! Rejections raised by roster operations.
//!
//! Every rejection is an in-band outcome: the roster is left untouched and
//! the caller decides how to report it.

use super::format::OneDecimal;
use super::limits::{MAX_POSITIONS, MAX_ROWS};
use super::types::{Seat, Weight};
use derive_new::new;
use tracing::instrument;

/// Operator-facing text for any out-of-range value.
pub const OUT_OF_RANGE: &str = "Out of range, try again";

/// Request to seat a musician: where, and how heavy.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Placement {
    /// Target slot.
    pub seat: Seat,
    /// Musician's weight.
    pub weight: Weight,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}", self.seat, self.weight)
    }
}

/// Error that can occur when building or changing a roster.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum RosterError {
    /// Requested row count is outside `1..=MAX_ROWS`.
    #[display("Row count {} is outside 1 to {}", _0, MAX_ROWS)]
    #[error(ignore)]
    RowCountOutOfRange(usize),

    /// Requested position count for a row is outside `1..=MAX_POSITIONS`.
    #[display("Row {} size {} is outside 1 to {}", row, size, MAX_POSITIONS)]
    RowSizeOutOfRange {
        /// Row letter.
        row: char,
        /// Rejected position count.
        size: usize,
    },

    /// Row letter does not name an existing row.
    #[display("Row {:?} does not exist", _0)]
    #[error(ignore)]
    RowOutOfRange(char),

    /// Position is outside the row's configured size.
    #[display("Position {} is outside row {} (1 to {})", position, row, size)]
    PositionOutOfRange {
        /// Row letter.
        row: char,
        /// Rejected one-based position.
        position: usize,
        /// Configured size of the row.
        size: usize,
    },

    /// Weight is outside `[MIN_WEIGHT, MAX_WEIGHT]`.
    #[display("Weight {} is out of range", _0)]
    #[error(ignore)]
    WeightOutOfRange(f64),

    /// Slot already holds a musician.
    #[display("Slot {} is already occupied", _0)]
    #[error(ignore)]
    SlotOccupied(Seat),

    /// Slot holds nobody.
    #[display("Slot {} is vacant", _0)]
    #[error(ignore)]
    SlotVacant(Seat),

    /// Adding the musician would push the row average over the limit.
    #[display(
        "Row {} total {} would exceed limit {}",
        row,
        OneDecimal(*total),
        OneDecimal(*limit)
    )]
    AverageWeightExceeded {
        /// Row letter.
        row: char,
        /// Row total including the candidate weight.
        total: f64,
        /// Maximum total allowed for the row.
        limit: f64,
    },

    /// A postcondition failed after a mutation.
    #[display("Invariant violation: {}", _0)]
    #[error(ignore)]
    InvariantViolation(String),
}

impl RosterError {
    /// Text shown to the operator after `ERROR: `.
    #[instrument]
    pub fn operator_message(&self) -> &'static str {
        match self {
            RosterError::RowCountOutOfRange(_)
            | RosterError::RowSizeOutOfRange { .. }
            | RosterError::RowOutOfRange(_)
            | RosterError::PositionOutOfRange { .. }
            | RosterError::WeightOutOfRange(_) => OUT_OF_RANGE,
            RosterError::SlotOccupied(_) => "There is already a musician there.",
            RosterError::SlotVacant(_) => "That position is vacant.",
            RosterError::AverageWeightExceeded { .. } => {
                "That would exceed the average weight limit."
            }
            RosterError::InvariantViolation(_) => "Internal roster error.",
        }
    }
}
