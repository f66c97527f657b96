//! Text command parsing.
//!
//! This module owns the key-to-command mapping so the session can remain
//! agnostic about concrete key bindings.

use game_core::{Action, Bump, Direction, PickupGeneral, ReturnControlToPlayer, Wait};

/// High-level command decoded from one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move, else interact, else attack.
    Bump(Direction),
    Wait,
    Pickup,
    ReturnControl,
    Quit,
}

impl Command {
    /// Decodes the first non-blank character of `line`.
    pub fn parse(line: &str) -> Option<Self> {
        let ch = line.trim().chars().next()?.to_ascii_lowercase();
        let command = match ch {
            'h' => Self::Bump(Direction::WEST),
            'j' => Self::Bump(Direction::SOUTH),
            'k' => Self::Bump(Direction::NORTH),
            'l' => Self::Bump(Direction::EAST),
            'y' => Self::Bump(Direction::NORTH_WEST),
            'u' => Self::Bump(Direction::NORTH_EAST),
            'b' => Self::Bump(Direction::SOUTH_WEST),
            'n' => Self::Bump(Direction::SOUTH_EAST),
            '.' => Self::Wait,
            'g' => Self::Pickup,
            'x' => Self::ReturnControl,
            'q' => Self::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// The action submitted for this command. `Quit` has none.
    pub fn action(self) -> Option<Box<dyn Action>> {
        match self {
            Self::Bump(direction) => Some(Box::new(Bump::new(direction))),
            Self::Wait => Some(Box::new(Wait)),
            Self::Pickup => Some(Box::new(PickupGeneral)),
            Self::ReturnControl => Some(Box::new(ReturnControlToPlayer)),
            Self::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_keys_map_to_directions() {
        assert_eq!(Command::parse("h"), Some(Command::Bump(Direction::WEST)));
        assert_eq!(Command::parse("  N\n"), Some(Command::Bump(Direction::SOUTH_EAST)));
        assert_eq!(Command::parse("y"), Some(Command::Bump(Direction::NORTH_WEST)));
    }

    #[test]
    fn other_commands() {
        assert_eq!(Command::parse("."), Some(Command::Wait));
        assert_eq!(Command::parse("g"), Some(Command::Pickup));
        assert_eq!(Command::parse("x"), Some(Command::ReturnControl));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("?"), None);
    }

    #[test]
    fn quit_has_no_action() {
        assert!(Command::Quit.action().is_none());
        assert!(Command::Wait.action().is_some());
    }
}
