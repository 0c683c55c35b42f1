//! Interactive console front end.
//!
//! The console is a blocking read-eval-print loop over any buffered reader
//! and writer, so the same code serves stdin/stdout and in-memory tests.

mod command;
mod input;
mod session;
mod setup;

pub use command::MenuCommand;
pub use input::{Reply, TokenReader};
pub use session::Session;
pub use setup::initialize_stadium;

use crate::layout::{LayoutError, StadiumLayout};
use crate::stadium::RosterError;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Operator-facing text for a token that is not a number.
pub const INVALID_NUMBER: &str = "Invalid number, try again";

/// Error that ends a console session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O error: {}", _0)]
    Io(std::io::Error),

    /// The input closed before the session finished.
    #[display("Input closed")]
    EndOfInput,

    /// The layout file could not be used.
    #[display("{}", _0)]
    Layout(LayoutError),

    /// The roster could not be built.
    #[display("{}", _0)]
    Roster(RosterError),
}

/// Prompt-and-answer channel to the operator.
#[derive(Debug)]
pub struct Console<R, W> {
    input: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Consumes the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a prompt without a line break.
    pub fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes a full line.
    pub fn line(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Reports a rejected value or action.
    #[instrument(skip(self))]
    pub fn reject(&mut self, error: &RosterError) -> Result<(), SessionError> {
        debug!(%error, "Rejected");
        self.error(error.operator_message())
    }

    /// Reports a token that should have been a number.
    #[instrument(skip(self))]
    pub fn invalid_number(&mut self, token: &str) -> Result<(), SessionError> {
        debug!(token, "Malformed number");
        self.error(INVALID_NUMBER)
    }

    /// Writes `ERROR: <message>`.
    pub fn error(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "ERROR: {}", message)?;
        Ok(())
    }

    /// Writes `****** <message>.`
    pub fn success(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "****** {}.", message)?;
        Ok(())
    }

    /// Reads the next token.
    pub fn read_token(&mut self) -> Result<String, SessionError> {
        self.input.next_token()?.ok_or(SessionError::EndOfInput)
    }

    /// Reads the next token as a whole number.
    pub fn read_integer(&mut self) -> Result<Reply<i64>, SessionError> {
        self.input.next_parsed()?.ok_or(SessionError::EndOfInput)
    }

    /// Reads the next token as a decimal number.
    pub fn read_decimal(&mut self) -> Result<Reply<f64>, SessionError> {
        self.input.next_parsed()?.ok_or(SessionError::EndOfInput)
    }
}

/// Runs a whole session: setup, then the menu loop until exit.
///
/// Closed input at any point ends the session without an error. Returns the
/// console output.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    mut console: Console<R, W>,
    layout: Option<&StadiumLayout>,
) -> Result<W, SessionError> {
    let roster = match initialize_stadium(&mut console, layout) {
        Ok(roster) => roster,
        Err(SessionError::EndOfInput) => {
            warn!("Input closed during setup");
            return Ok(console.into_output());
        }
        Err(e) => return Err(e),
    };

    let mut session = Session::new(console, roster);
    session.run()?;
    Ok(session.into_output())
}
