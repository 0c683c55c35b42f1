//! Contract-based validation for roster changes.
//!
//! Each change is guarded by preconditions checked before it is applied and
//! postconditions checked after: {P} action {Q}.

use super::action::{Placement, RosterError};
use super::invariants::check_roster;
use super::roster::Roster;
use super::types::{Seat, Slot};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a state change.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RosterError>;

    /// Checks postconditions after applying the action.
    fn post(state: &S, action: &A) -> Result<(), RosterError>;
}

/// Precondition: the seat names an existing row and a position inside it.
pub struct SeatInRange;

impl SeatInRange {
    /// Checks the precondition against the roster.
    #[instrument(skip(roster))]
    pub fn check(seat: &Seat, roster: &Roster) -> Result<(), RosterError> {
        let size = roster
            .row_size(seat.row)
            .ok_or(RosterError::RowOutOfRange(seat.row_letter()))?;
        if (1..=size).contains(&seat.position) {
            Ok(())
        } else {
            Err(RosterError::PositionOutOfRange {
                row: seat.row_letter(),
                position: seat.position,
                size,
            })
        }
    }
}

/// Precondition: nobody stands at the seat.
pub struct SlotIsVacant;

impl SlotIsVacant {
    /// Checks the precondition against the roster.
    #[instrument(skip(roster))]
    pub fn check(seat: &Seat, roster: &Roster) -> Result<(), RosterError> {
        match roster.slot(*seat) {
            Some(Slot::Vacant) => Ok(()),
            Some(Slot::Occupied(_)) => Err(RosterError::SlotOccupied(*seat)),
            None => SeatInRange::check(seat, roster),
        }
    }
}

/// Precondition: somebody stands at the seat.
pub struct SlotIsOccupied;

impl SlotIsOccupied {
    /// Checks the precondition against the roster.
    #[instrument(skip(roster))]
    pub fn check(seat: &Seat, roster: &Roster) -> Result<(), RosterError> {
        match roster.slot(*seat) {
            Some(Slot::Occupied(_)) => Ok(()),
            Some(Slot::Vacant) => Err(RosterError::SlotVacant(*seat)),
            None => SeatInRange::check(seat, roster),
        }
    }
}

/// Precondition: the row total, including the newcomer, stays within the
/// row limit.
pub struct WithinAverageLimit;

impl WithinAverageLimit {
    /// Checks the precondition against the roster.
    #[instrument(skip(roster))]
    pub fn check(placement: &Placement, roster: &Roster) -> Result<(), RosterError> {
        let row = placement.seat.row;
        let total = roster.row_total(row) + placement.weight.value();
        let limit = roster.row_limit(row);
        if total > limit {
            Err(RosterError::AverageWeightExceeded {
                row: placement.seat.row_letter(),
                total,
                limit,
            })
        } else {
            Ok(())
        }
    }
}

/// Contract for seating a musician.
///
/// Preconditions:
/// - Seat is in range
/// - Slot is vacant
/// - Row stays within the average limit
///
/// Postconditions:
/// - Slot holds the placed weight
/// - Roster invariants hold
pub struct AddContract;

impl Contract<Roster, Placement> for AddContract {
    fn pre(roster: &Roster, placement: &Placement) -> Result<(), RosterError> {
        SeatInRange::check(&placement.seat, roster)?;
        SlotIsVacant::check(&placement.seat, roster)?;
        WithinAverageLimit::check(placement, roster)?;
        Ok(())
    }

    fn post(roster: &Roster, placement: &Placement) -> Result<(), RosterError> {
        if roster.slot(placement.seat) != Some(Slot::Occupied(placement.weight)) {
            warn!(%placement, "Slot does not hold the placed weight");
            return Err(RosterError::InvariantViolation(format!(
                "slot {} does not hold {}",
                placement.seat, placement.weight
            )));
        }
        check_roster(roster).map_err(RosterError::InvariantViolation)
    }
}

/// Contract for removing a musician.
///
/// Preconditions:
/// - Seat is in range
/// - Slot is occupied
///
/// Postconditions:
/// - Slot is vacant
/// - Roster invariants hold
pub struct RemoveContract;

impl Contract<Roster, Seat> for RemoveContract {
    fn pre(roster: &Roster, seat: &Seat) -> Result<(), RosterError> {
        SeatInRange::check(seat, roster)?;
        SlotIsOccupied::check(seat, roster)?;
        Ok(())
    }

    fn post(roster: &Roster, seat: &Seat) -> Result<(), RosterError> {
        if roster.slot(*seat) != Some(Slot::Vacant) {
            warn!(%seat, "Slot still occupied after removal");
            return Err(RosterError::InvariantViolation(format!(
                "slot {} is still occupied",
                seat
            )));
        }
        check_roster(roster).map_err(RosterError::InvariantViolation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stadium::Weight;

    fn placement(row: usize, position: usize, weight: f64) -> Placement {
        Placement::new(Seat::new(row, position), Weight::new(weight).unwrap())
    }

    #[test]
    fn test_seat_in_range() {
        let roster = Roster::new(&[2, 3]).unwrap();
        assert!(SeatInRange::check(&Seat::new(1, 3), &roster).is_ok());
        assert_eq!(
            SeatInRange::check(&Seat::new(2, 1), &roster),
            Err(RosterError::RowOutOfRange('C'))
        );
        assert!(matches!(
            SeatInRange::check(&Seat::new(0, 0), &roster),
            Err(RosterError::PositionOutOfRange { position: 0, size: 2, .. })
        ));
        assert!(SeatInRange::check(&Seat::new(0, 3), &roster).is_err());
    }

    #[test]
    fn test_average_limit_boundary_is_inclusive() {
        let mut roster = Roster::new(&[2]).unwrap();
        roster.add_musician(placement(0, 1, 100.0)).unwrap();

        assert!(WithinAverageLimit::check(&placement(0, 2, 100.0), &roster).is_ok());
        assert!(matches!(
            WithinAverageLimit::check(&placement(0, 2, 100.5), &roster),
            Err(RosterError::AverageWeightExceeded { row: 'A', .. })
        ));
    }

    #[test]
    fn test_add_contract_rejects_occupied() {
        let mut roster = Roster::new(&[3]).unwrap();
        roster.add_musician(placement(0, 2, 50.0)).unwrap();

        assert_eq!(
            AddContract::pre(&roster, &placement(0, 2, 60.0)),
            Err(RosterError::SlotOccupied(Seat::new(0, 2)))
        );
    }

    #[test]
    fn test_remove_contract_rejects_vacant() {
        let roster = Roster::new(&[3]).unwrap();
        assert_eq!(
            RemoveContract::pre(&roster, &Seat::new(0, 1)),
            Err(RosterError::SlotVacant(Seat::new(0, 1)))
        );
    }
}
