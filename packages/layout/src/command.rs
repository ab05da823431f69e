//! Named layout commands.
//!
//! Hosts invoke layout behaviour by name (from keybindings, an IPC socket, a
//! scripting console). This module maps those names onto a closed enum so the
//! layouts can match on it exhaustively. Parsing accepts snake_case names and
//! also tolerates `-` as the word separator, so `shuffle_up` and `shuffle-up`
//! are the same command.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A command routed to the active layout.
///
/// Not every layout supports every command. Unsupported commands are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutCommand {
    /// Focus the next client.
    Next,
    /// Focus the previous client.
    Previous,
    /// Move up: rotates (max, tile) or moves focus within the current stack.
    Up,
    /// Move down: the inverse of [`LayoutCommand::Up`].
    Down,
    /// Rotate the stacks one slot forward.
    Rotate,
    /// Move the focused client one position toward the head of its stack.
    ShuffleUp,
    /// Move the focused client one position toward the tail of its stack.
    ShuffleDown,
    /// Append an empty stack.
    #[serde(alias = "add_stack")]
    Add,
    /// Delete the current stack, merging its clients into another one.
    #[serde(alias = "delete_stack")]
    Delete,
    /// Toggle split rendering of the current stack.
    ToggleSplit,
    /// Move the focused client to the next stack.
    ClientToNext,
    /// Move the focused client to the previous stack.
    ClientToPrevious,
    /// Grow the master area.
    IncreaseRatio,
    /// Shrink the master area.
    DecreaseRatio,
    /// Put one more client in the master area.
    IncreaseMaster,
    /// Put one fewer client in the master area.
    DecreaseMaster,
}

impl LayoutCommand {
    /// Every command, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Next,
        Self::Previous,
        Self::Up,
        Self::Down,
        Self::Rotate,
        Self::ShuffleUp,
        Self::ShuffleDown,
        Self::Add,
        Self::Delete,
        Self::ToggleSplit,
        Self::ClientToNext,
        Self::ClientToPrevious,
        Self::IncreaseRatio,
        Self::DecreaseRatio,
        Self::IncreaseMaster,
        Self::DecreaseMaster,
    ];

    /// Returns the canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Up => "up",
            Self::Down => "down",
            Self::Rotate => "rotate",
            Self::ShuffleUp => "shuffle_up",
            Self::ShuffleDown => "shuffle_down",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::ToggleSplit => "toggle_split",
            Self::ClientToNext => "client_to_next",
            Self::ClientToPrevious => "client_to_previous",
            Self::IncreaseRatio => "increase_ratio",
            Self::DecreaseRatio => "decrease_ratio",
            Self::IncreaseMaster => "increase_master",
            Self::DecreaseMaster => "decrease_master",
        }
    }
}

impl FromStr for LayoutCommand {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "add_stack" => return Ok(Self::Add),
            "delete_stack" => return Ok(Self::Delete),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == normalized)
            .ok_or_else(|| LayoutError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for LayoutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for command in LayoutCommand::ALL {
            assert_eq!(command.as_str().parse::<LayoutCommand>(), Ok(command));
        }
    }

    #[test]
    fn test_parse_dash_separator() {
        assert_eq!("shuffle-up".parse(), Ok(LayoutCommand::ShuffleUp));
        assert_eq!("client-to-previous".parse(), Ok(LayoutCommand::ClientToPrevious));
        assert_eq!(" Toggle-Split ".parse(), Ok(LayoutCommand::ToggleSplit));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("add_stack".parse(), Ok(LayoutCommand::Add));
        assert_eq!("delete-stack".parse(), Ok(LayoutCommand::Delete));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "explode".parse::<LayoutCommand>(),
            Err(LayoutError::UnknownCommand("explode".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_display() {
        for command in LayoutCommand::ALL {
            let json = serde_json::to_string(&command).unwrap();
            assert_eq!(json, format!("\"{command}\""));
        }
        let aliased: LayoutCommand = serde_json::from_str("\"delete_stack\"").unwrap();
        assert_eq!(aliased, LayoutCommand::Delete);
    }
}
