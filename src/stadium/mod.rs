//! Stadium roster engine: rows of slots, weight rules and their checks.

mod action;
mod contracts;
mod format;
mod invariants;
mod limits;
mod roster;
mod types;

pub use action::{OUT_OF_RANGE, Placement, RosterError};
pub use contracts::{
    AddContract, Contract, RemoveContract, SeatInRange, SlotIsOccupied, SlotIsVacant,
    WithinAverageLimit,
};
pub use format::OneDecimal;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, RosterInvariants, RowAverageWithinLimit,
    WeightsInRange,
};
pub use limits::{MAX_POSITIONS, MAX_ROW_WEIGHT, MAX_ROWS, MAX_WEIGHT, MIN_WEIGHT};
pub use roster::{Roster, validate_row_count, validate_row_size};
pub use types::{Seat, Slot, Weight, row_index, row_letter};
