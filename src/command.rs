//! Line commands understood by the `dragboard` binary.
//!
//! One command per line, whitespace separated. Gesture commands map one to
//! one onto the board's gesture events so a session can be scripted.

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use crate::card::CardId;
use crate::column::ColumnId;
use crate::resolve::DropTarget;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(ColumnId),
    Delete(CardId),
    Status(CardId, ColumnId),
    Label(CardId, String),
    Login(String),
    Logout,
    Drag(CardId),
    Over(DropTarget),
    Drop,
    Cancel,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for a blank line, an unknown verb, or missing
    /// arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match (verb, rest.as_slice()) {
            ("list" | "ls", []) => Ok(Self::List),
            ("add", [column]) => Ok(Self::Add(ColumnId::new(*column))),
            ("add", _) => Err(CommandError::Usage("add <column>")),
            ("delete" | "rm", [card]) => Ok(Self::Delete(CardId::new(*card))),
            ("delete" | "rm", _) => Err(CommandError::Usage("delete <card>")),
            ("status", [card, column]) => Ok(Self::Status(CardId::new(*card), ColumnId::new(*column))),
            ("status", _) => Err(CommandError::Usage("status <card> <column>")),
            ("label", [card, text @ ..]) if !text.is_empty() => Ok(Self::Label(CardId::new(*card), text.join(" "))),
            ("label", _) => Err(CommandError::Usage("label <card> <text>")),
            ("login", [name]) => Ok(Self::Login((*name).to_owned())),
            ("login", _) => Err(CommandError::Usage("login <name>")),
            ("logout", []) => Ok(Self::Logout),
            ("drag", [card]) => Ok(Self::Drag(CardId::new(*card))),
            ("drag", _) => Err(CommandError::Usage("drag <card>")),
            ("over", ["card", card]) => Ok(Self::Over(DropTarget::OverCard(CardId::new(*card)))),
            ("over", ["column", column]) => Ok(Self::Over(DropTarget::OverColumn(ColumnId::new(*column)))),
            ("over", ["none"]) => Ok(Self::Over(DropTarget::None)),
            ("over", _) => Err(CommandError::Usage("over card <id> | over column <id> | over none")),
            ("drop", []) => Ok(Self::Drop),
            ("cancel", []) => Ok(Self::Cancel),
            ("quit" | "exit", []) => Ok(Self::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}
