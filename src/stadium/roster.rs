//! The stadium roster: rows of slots and the rules for changing them.

use super::action::{Placement, RosterError};
use super::contracts::{AddContract, Contract, RemoveContract, SeatInRange, SlotIsVacant};
use super::format::OneDecimal;
use super::limits::{MAX_POSITIONS, MAX_ROWS, MAX_ROW_WEIGHT};
use super::types::{Seat, Slot, Weight, row_index, row_letter};
use tracing::{debug, info, instrument};

/// Grid of musician slots.
///
/// The number of rows and the size of each row are fixed when the roster is
/// built. Only [`Roster::add_musician`] and [`Roster::remove_musician`]
/// change slots, and both leave the roster untouched when they reject.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    rows: Vec<Vec<Slot>>,
}

impl Roster {
    /// Creates a roster with one row per entry of `row_sizes`, all vacant.
    #[instrument]
    pub fn new(row_sizes: &[usize]) -> Result<Self, RosterError> {
        if !(1..=MAX_ROWS).contains(&row_sizes.len()) {
            return Err(RosterError::RowCountOutOfRange(row_sizes.len()));
        }
        for (row, &size) in row_sizes.iter().enumerate() {
            check_row_size(row, size)?;
        }

        let rows = row_sizes
            .iter()
            .map(|&size| vec![Slot::Vacant; size])
            .collect();
        info!(rows = row_sizes.len(), "Roster created");
        Ok(Self { rows })
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the configured number of positions in a row.
    pub fn row_size(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Returns the slot at a seat, or `None` if the seat is out of range.
    pub fn slot(&self, seat: Seat) -> Option<Slot> {
        let index = seat.position.checked_sub(1)?;
        self.rows.get(seat.row)?.get(index).copied()
    }

    /// Sum of occupied weights in a row (0.0 for unknown rows).
    pub fn row_total(&self, row: usize) -> f64 {
        self.rows
            .get(row)
            .map_or(0.0, |slots| slots.iter().map(Slot::load).sum())
    }

    /// Row total divided by the row's configured size.
    pub fn row_average(&self, row: usize) -> f64 {
        match self.row_size(row) {
            Some(size) if size > 0 => self.row_total(row) / size as f64,
            _ => 0.0,
        }
    }

    /// Largest total a row may carry.
    pub fn row_limit(&self, row: usize) -> f64 {
        MAX_ROW_WEIGHT * self.row_size(row).unwrap_or(0) as f64
    }

    /// Maps a row letter onto an existing row index.
    #[instrument(skip(self))]
    pub fn resolve_row(&self, letter: char) -> Result<usize, RosterError> {
        row_index(letter)
            .filter(|&row| row < self.row_count())
            .ok_or(RosterError::RowOutOfRange(letter))
    }

    /// Builds a seat after checking it lies inside the roster.
    #[instrument(skip(self))]
    pub fn seat(&self, row: usize, position: usize) -> Result<Seat, RosterError> {
        let seat = Seat::new(row, position);
        SeatInRange::check(&seat, self)?;
        Ok(seat)
    }

    /// Checks that nobody stands at the seat yet.
    #[instrument(skip(self))]
    pub fn ensure_vacant(&self, seat: Seat) -> Result<(), RosterError> {
        SlotIsVacant::check(&seat, self)
    }

    /// Seats a musician.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range seats, occupied slots and placements that would
    /// push the row average over [`MAX_ROW_WEIGHT`].
    #[instrument(skip(self, placement), fields(placement = %placement))]
    pub fn add_musician(&mut self, placement: Placement) -> Result<(), RosterError> {
        AddContract::pre(self, &placement)?;

        self.rows[placement.seat.row][placement.seat.position - 1] =
            Slot::Occupied(placement.weight);
        AddContract::post(self, &placement)?;

        debug!(total = self.row_total(placement.seat.row), "Musician added");
        Ok(())
    }

    /// Removes the musician at a seat, returning their weight.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range seats and vacant slots.
    #[instrument(skip(self, seat), fields(seat = %seat))]
    pub fn remove_musician(&mut self, seat: Seat) -> Result<Weight, RosterError> {
        RemoveContract::pre(self, &seat)?;

        let slot = std::mem::take(&mut self.rows[seat.row][seat.position - 1]);
        RemoveContract::post(self, &seat)?;

        debug!(total = self.row_total(seat.row), "Musician removed");
        slot.weight()
            .ok_or_else(|| RosterError::InvariantViolation(format!("slot {} was vacant", seat)))
    }
}

fn check_row_size(row: usize, size: usize) -> Result<(), RosterError> {
    if (1..=MAX_POSITIONS).contains(&size) {
        Ok(())
    } else {
        Err(RosterError::RowSizeOutOfRange {
            row: row_letter(row),
            size,
        })
    }
}

/// Validates a single row size, as asked for during interactive setup.
pub fn validate_row_size(row: usize, size: usize) -> Result<usize, RosterError> {
    check_row_size(row, size).map(|()| size)
}

/// Validates a row count, as asked for during interactive setup.
pub fn validate_row_count(count: usize) -> Result<usize, RosterError> {
    if (1..=MAX_ROWS).contains(&count) {
        Ok(count)
    } else {
        Err(RosterError::RowCountOutOfRange(count))
    }
}

/// Renders the assignment: one line per row with each slot, the row total
/// and the row average.
impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, slots) in self.rows.iter().enumerate() {
            write!(f, "{}:", row_letter(row))?;
            for slot in slots {
                write!(f, "{:>6}", OneDecimal(slot.load()))?;
            }
            writeln!(
                f,
                "  [{:>6}, {:>8}]",
                OneDecimal(self.row_total(row)),
                OneDecimal(self.row_average(row))
            )?;
        }
        Ok(())
    }
}
