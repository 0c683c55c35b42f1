//! Band of the Hour library - stadium roster for a marching band
//!
//! A stadium is a fixed grid of rows, each with its own number of
//! positions. Musicians are seated by weight, and every row's average weight
//! must stay within a limit.
//!
//! # Architecture
//!
//! - **Stadium**: the roster engine, its typed rejections, contracts and invariants
//! - **Layout**: optional TOML description of the rows
//! - **Console**: blocking prompt loop over any reader and writer
//!
//! # Example
//!
//! ```
//! use band_of_the_hour::{Placement, Roster, Seat, Weight};
//!
//! # fn example() -> Result<(), band_of_the_hour::RosterError> {
//! let mut roster = Roster::new(&[2, 4])?;
//! roster.add_musician(Placement::new(Seat::new(0, 1), Weight::new(60.0)?))?;
//! assert_eq!(roster.row_average(0), 30.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod layout;
mod stadium;

// Crate-level exports - Roster engine
pub use stadium::{
    AddContract, Contract, Invariant, InvariantSet, InvariantViolation, MAX_POSITIONS,
    MAX_ROW_WEIGHT, MAX_ROWS, MAX_WEIGHT, MIN_WEIGHT, OUT_OF_RANGE, OneDecimal, Placement,
    RemoveContract, Roster, RosterError, RosterInvariants, RowAverageWithinLimit, Seat,
    SeatInRange, Slot, SlotIsOccupied, SlotIsVacant, Weight, WeightsInRange, WithinAverageLimit,
    row_index, row_letter, validate_row_count, validate_row_size,
};

// Crate-level exports - Layout configuration
pub use layout::{LayoutError, StadiumLayout};

// Crate-level exports - Console session
pub use console::{
    Console, INVALID_NUMBER, MenuCommand, Reply, Session, SessionError, TokenReader,
    initialize_stadium, play,
};
