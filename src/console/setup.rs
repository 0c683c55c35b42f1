//! Stadium setup: row count and row sizes.

use super::{Console, Reply, SessionError};
use crate::layout::StadiumLayout;
use crate::stadium::{Roster, RosterError, row_letter, validate_row_count, validate_row_size};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

const BANNER: &str = "Welcome to the Band of the Hour";
const RULE: &str = "--------------------------------";

/// Prints the banner and builds the roster.
///
/// With a layout the questions are skipped. Without one the operator is
/// asked for the row count and then each row's size, and every answer is
/// asked again until it is in range.
#[instrument(skip_all, fields(from_layout = layout.is_some()))]
pub fn initialize_stadium<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    layout: Option<&StadiumLayout>,
) -> Result<Roster, SessionError> {
    console.line(BANNER)?;
    console.line(RULE)?;

    let roster = match layout {
        Some(layout) => layout.build_roster()?,
        None => {
            let rows = ask(console, "Please enter number of rows: ", validate_row_count)?;
            let mut sizes = Vec::with_capacity(rows);
            for row in 0..rows {
                let prompt = format!(
                    "Please enter number of positions in row {}: ",
                    row_letter(row)
                );
                sizes.push(ask(console, &prompt, |size| validate_row_size(row, size))?);
            }
            Roster::new(&sizes)?
        }
    };

    console.line("")?;
    info!(rows = roster.row_count(), "Stadium initialized");
    Ok(roster)
}

/// Asks until the answer is a number that passes `validate`.
fn ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    validate: impl Fn(usize) -> Result<usize, RosterError>,
) -> Result<usize, SessionError> {
    loop {
        console.prompt(prompt)?;
        match console.read_integer()? {
            Reply::Value(n) => match validate(to_count(n)) {
                Ok(value) => return Ok(value),
                Err(e) => console.reject(&e)?,
            },
            Reply::Malformed(token) => console.invalid_number(&token)?,
        }
    }
}

/// Converts an answer to a count; negative answers become 0, which no
/// range accepts.
pub(super) fn to_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
