//! Whitespace-separated token input.
//!
//! Answers are read as tokens, not lines: several answers may share one line
//! and blank lines are skipped.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;
use tracing::{instrument, trace};

/// Outcome of reading a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// The token parsed.
    Value(T),
    /// The token did not parse; it has been consumed.
    Malformed(String),
}

/// Splits a reader into whitespace-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    #[instrument(skip(self))]
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                trace!("Input exhausted");
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the next token and parses it.
    pub fn next_parsed<T: FromStr>(&mut self) -> std::io::Result<Option<Reply<T>>> {
        Ok(self.next_token()?.map(|token| match token.parse() {
            Ok(value) => Reply::Value(value),
            Err(_) => Reply::Malformed(token),
        }))
    }
}
