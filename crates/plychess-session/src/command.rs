//! Front-end command parsing.

use plychess_core::Board;

use crate::error::SessionError;
use crate::game::SessionConfig;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a fresh game from the initial position.
    New,
    /// `board` -- print the current position.
    Board,
    /// `depth N` -- change the engine's search depth.
    Depth(u8),
    /// `position <placement> [castling]` -- start a game from a custom position.
    Position(Board),
    /// `quit` -- leave the session.
    Quit,
    /// Anything else is taken as a move in coordinate notation.
    Move(String),
}

/// Parse a single line of input into a [`Command`].
///
/// Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let cmd = match head {
        "new" => Command::New,
        "board" => Command::Board,
        "quit" => Command::Quit,
        "depth" => Command::Depth(SessionConfig::parse_depth(&rest.join(" "))?),
        "position" => Command::Position(rest.join(" ").parse()?),
        _ => Command::Move(head.to_string()),
    };
    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use plychess_core::PlacementError;

    use super::*;

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("new").unwrap(), Some(Command::New));
        assert_eq!(parse_command("  board ").unwrap(), Some(Command::Board));
        assert_eq!(parse_command("quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn depth_command() {
        assert_eq!(parse_command("depth 3").unwrap(), Some(Command::Depth(3)));
        assert!(matches!(
            parse_command("depth 9"),
            Err(SessionError::InvalidDepth { value }) if value == "9"
        ));
        assert!(matches!(
            parse_command("depth"),
            Err(SessionError::InvalidDepth { .. })
        ));
    }

    #[test]
    fn position_command() {
        let cmd = parse_command("position 4k3/8/8/8/8/8/8/4K3 -").unwrap();
        let expected: Board = "4k3/8/8/8/8/8/8/4K3 -".parse().unwrap();
        assert_eq!(cmd, Some(Command::Position(expected)));

        assert!(matches!(
            parse_command("position 4k3/8/8"),
            Err(SessionError::Placement {
                source: PlacementError::WrongRowCount { found: 3 }
            })
        ));
    }

    #[test]
    fn anything_else_is_a_move() {
        assert_eq!(
            parse_command("e2e4").unwrap(),
            Some(Command::Move("e2e4".to_string()))
        );
        assert_eq!(
            parse_command("xyz").unwrap(),
            Some(Command::Move("xyz".to_string()))
        );
    }
}
