//! Stadium layout loaded from a TOML file.
//!
//! A layout replaces the interactive setup questions:
//!
//! ```toml
//! rows = [4, 6, 8]
//! ```

use crate::stadium::{Roster, RosterError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Row layout of the stadium: one entry per row, each the row's position
/// count.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct StadiumLayout {
    /// Position count of each row, front to back.
    rows: Vec<usize>,
}

impl StadiumLayout {
    /// Creates a layout from row sizes.
    #[instrument]
    pub fn new(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Loads a layout from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        debug!("Loading layout from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LayoutError::new(format!("Failed to read layout file: {}", e)))?;

        let layout = Self::from_toml(&content)?;
        info!(rows = layout.rows.len(), "Layout loaded successfully");
        Ok(layout)
    }

    /// Parses a layout from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        toml::from_str(content)
            .map_err(|e| LayoutError::new(format!("Failed to parse layout: {}", e)))
    }

    /// Builds an empty roster with this layout.
    #[instrument(skip(self))]
    pub fn build_roster(&self) -> Result<Roster, LayoutError> {
        Roster::new(&self.rows).map_err(LayoutError::from)
    }
}

/// Layout error.
#[derive(Debug, Clone, Display, Error)]
#[display("Layout error: {} at {}:{}", message, file, line)]
pub struct LayoutError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LayoutError {
    /// Creates a new layout error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RosterError> for LayoutError {
    #[track_caller]
    fn from(err: RosterError) -> Self {
        Self::new(format!("Invalid layout: {}", err))
    }
}
