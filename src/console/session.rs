//! The main menu loop and its add, remove and print flows.

use super::setup::to_count;
use super::{Console, MenuCommand, Reply, SessionError};
use crate::stadium::{MAX_WEIGHT, MIN_WEIGHT, Placement, Roster, Seat, Weight};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const MENU: &str = "(A)dd, (R)emove, (P)rint, e(X)it: ";

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// An operator session over a roster.
///
/// Owns both the console and the roster for the lifetime of the loop.
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an initialized roster.
    pub fn new(console: Console<R, W>, roster: Roster) -> Self {
        Self { console, roster }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the session, returning the console output.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu loop until the operator exits or the input closes.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Operator exited");
                    return Ok(());
                }
                Err(SessionError::EndOfInput) => {
                    warn!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Flow, SessionError> {
        self.console.line("")?;
        self.console.prompt(MENU)?;
        let token = self.console.read_token()?;

        match MenuCommand::from_token(&token) {
            Some(MenuCommand::Add) => self.add_musician()?,
            Some(MenuCommand::Remove) => self.remove_musician()?,
            Some(MenuCommand::Print) => self.print_assignment()?,
            Some(MenuCommand::Exit) => {
                self.console.line("Exiting...")?;
                return Ok(Flow::Exit);
            }
            None => {
                debug!(%token, "Unknown command");
                self.console.error("Invalid option, try again")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Asks for a row, position and weight, then seats the musician.
    ///
    /// Occupancy is checked before the weight is asked for.
    #[instrument(skip(self))]
    pub fn add_musician(&mut self) -> Result<(), SessionError> {
        let Some(seat) = self.read_seat()? else {
            return Ok(());
        };
        if let Err(e) = self.roster.ensure_vacant(seat) {
            return self.console.reject(&e);
        }

        self.console.prompt(&format!(
            "Please enter weight ({:.1} to {:.1}): ",
            MIN_WEIGHT, MAX_WEIGHT
        ))?;
        let value = match self.console.read_decimal()? {
            Reply::Value(value) => value,
            Reply::Malformed(token) => return self.console.invalid_number(&token),
        };

        let outcome = Weight::new(value)
            .and_then(|weight| self.roster.add_musician(Placement::new(seat, weight)));
        match outcome {
            Ok(()) => {
                info!(%seat, value, "Musician added");
                self.console.success("Musician added")
            }
            Err(e) => self.console.reject(&e),
        }
    }

    /// Asks for a row and position, then removes the musician there.
    #[instrument(skip(self))]
    pub fn remove_musician(&mut self) -> Result<(), SessionError> {
        let Some(seat) = self.read_seat()? else {
            return Ok(());
        };

        match self.roster.remove_musician(seat) {
            Ok(weight) => {
                info!(%seat, %weight, "Musician removed");
                self.console.success("Musician removed")
            }
            Err(e) => self.console.reject(&e),
        }
    }

    /// Prints every row with its total and average.
    #[instrument(skip(self))]
    pub fn print_assignment(&mut self) -> Result<(), SessionError> {
        let rendered = self.roster.to_string();
        self.console.prompt(&rendered)
    }

    /// Asks for a row letter and a position.
    ///
    /// Returns `None` after reporting a bad answer.
    fn read_seat(&mut self) -> Result<Option<Seat>, SessionError> {
        self.console.prompt("Please enter row letter: ")?;
        let token = self.console.read_token()?;
        let letter = token.chars().next().unwrap_or(' ');
        let row = match self.roster.resolve_row(letter) {
            Ok(row) => row,
            Err(e) => {
                self.console.reject(&e)?;
                return Ok(None);
            }
        };

        let size = self.roster.row_size(row).unwrap_or(0);
        self.console
            .prompt(&format!("Please enter position number (1 to {}): ", size))?;
        let position = match self.console.read_integer()? {
            Reply::Value(n) => to_count(n),
            Reply::Malformed(token) => {
                self.console.invalid_number(&token)?;
                return Ok(None);
            }
        };

        match self.roster.seat(row, position) {
            Ok(seat) => Ok(Some(seat)),
            Err(e) => {
                self.console.reject(&e)?;
                Ok(None)
            }
        }
    }
}
