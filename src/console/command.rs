//! Menu commands of the interactive session.

use strum::IntoEnumIterator;
use tracing::instrument;

/// A command chosen at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum MenuCommand {
    /// Seat a musician.
    Add,
    /// Remove a musician.
    Remove,
    /// Print the assignment.
    Print,
    /// Leave the session.
    Exit,
}

impl MenuCommand {
    /// Key that selects this command.
    pub fn key(self) -> char {
        match self {
            MenuCommand::Add => 'A',
            MenuCommand::Remove => 'R',
            MenuCommand::Print => 'P',
            MenuCommand::Exit => 'X',
        }
    }

    /// Parses a menu answer: its first character, ignoring case.
    #[instrument]
    pub fn from_token(token: &str) -> Option<Self> {
        let key = token.chars().next()?.to_ascii_uppercase();
        Self::iter().find(|command| command.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_ignores_case_and_tail() {
        assert_eq!(MenuCommand::from_token("a"), Some(MenuCommand::Add));
        assert_eq!(MenuCommand::from_token("Remove"), Some(MenuCommand::Remove));
        assert_eq!(MenuCommand::from_token("x"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_token("q"), None);
        assert_eq!(MenuCommand::from_token(""), None);
    }
}
