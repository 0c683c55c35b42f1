//! Compile-time limits for the stadium layout and musician weights.

/// Maximum number of rows in the stadium.
pub const MAX_ROWS: usize = 10;

/// Maximum number of positions in a single row.
pub const MAX_POSITIONS: usize = 8;

/// Lightest musician accepted.
pub const MIN_WEIGHT: f64 = 45.0;

/// Heaviest musician accepted.
pub const MAX_WEIGHT: f64 = 200.0;

/// Maximum average weight per position in a row.
pub const MAX_ROW_WEIGHT: f64 = 100.0;
