//! Core domain types for the stadium roster.

use super::action::RosterError;
use super::format::OneDecimal;
use super::limits::{MAX_WEIGHT, MIN_WEIGHT};
use derive_new::new;
use tracing::instrument;

/// Weight of a single musician.
///
/// Can only be constructed inside `[MIN_WEIGHT, MAX_WEIGHT]`, so an
/// occupied slot always holds a legal weight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    /// Validates a raw weight.
    #[instrument]
    pub fn new(value: f64) -> Result<Self, RosterError> {
        // NaN fails both comparisons, so it is rejected here too.
        if (MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RosterError::WeightOutOfRange(value))
        }
    }

    /// Returns the weight as a plain number.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = RosterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OneDecimal(self.0))
    }
}

/// A position in a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Slot {
    /// Nobody stands here.
    #[default]
    Vacant,
    /// A musician of the given weight stands here.
    Occupied(Weight),
}

impl Slot {
    /// Checks if the slot is vacant.
    pub fn is_vacant(&self) -> bool {
        matches!(self, Slot::Vacant)
    }

    /// Returns the musician's weight, if any.
    pub fn weight(&self) -> Option<Weight> {
        match self {
            Slot::Vacant => None,
            Slot::Occupied(weight) => Some(*weight),
        }
    }

    /// Weight this slot contributes to its row total (0.0 when vacant).
    pub fn load(&self) -> f64 {
        self.weight().map_or(0.0, Weight::value)
    }
}

/// Address of a slot: zero-based row index and one-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Seat {
    /// Zero-based row index (row `A` is 0).
    pub row: usize,
    /// One-based position within the row.
    pub position: usize,
}

impl Seat {
    /// Returns the row letter of this seat.
    pub fn row_letter(&self) -> char {
        row_letter(self.row)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.position)
    }
}

/// Converts a zero-based row index into its letter (`0` -> `A`).
pub fn row_letter(row: usize) -> char {
    char::from_u32('A' as u32 + row as u32).unwrap_or('?')
}

/// Converts a row letter into a zero-based index, ignoring case.
///
/// Returns `None` for characters that are not ASCII letters. Whether the
/// row actually exists is decided by the roster.
pub fn row_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(Weight::new(MIN_WEIGHT).is_ok());
        assert!(Weight::new(MAX_WEIGHT).is_ok());
        assert!(Weight::new(44.9).is_err());
        assert!(Weight::new(200.1).is_err());
    }

    #[test]
    fn test_weight_rejects_nan() {
        assert!(Weight::new(f64::NAN).is_err());
    }

    #[test]
    fn test_vacant_slot_has_no_load() {
        assert_eq!(Slot::Vacant.load(), 0.0);
        assert!(Slot::default().is_vacant());
    }

    #[test]
    fn test_row_letters_round_trip() {
        assert_eq!(row_letter(0), 'A');
        assert_eq!(row_letter(9), 'J');
        assert_eq!(row_index('a'), Some(0));
        assert_eq!(row_index('J'), Some(9));
        assert_eq!(row_index('3'), None);
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(Seat::new(1, 3).to_string(), "B3");
    }

    #[test]
    fn test_weight_display_rounds_half_up() {
        assert_eq!(Weight::new(45.25).unwrap().to_string(), "45.3");
        assert_eq!(Weight::new(199.95).unwrap().to_string(), "200.0");
    }
}
