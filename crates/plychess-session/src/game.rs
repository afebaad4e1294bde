//! Game session state and turn handling.

use std::fmt;

use plychess_core::{Board, Color, Move};
use plychess_engine::select_move;
use tracing::debug;

use crate::error::SessionError;
use crate::notation::parse_move;

/// Tunable session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Plies the engine looks ahead when choosing its reply.
    pub depth: u8,
}

impl SessionConfig {
    /// Shallowest accepted search depth.
    pub const MIN_DEPTH: u8 = 1;
    /// Deepest accepted search depth.
    pub const MAX_DEPTH: u8 = 8;

    /// Parse and range-check a depth value.
    pub fn parse_depth(value: &str) -> Result<u8, SessionError> {
        match value.trim().parse::<u8>() {
            Ok(depth) if Self::accepts(depth) => Ok(depth),
            _ => Err(SessionError::InvalidDepth {
                value: value.to_string(),
            }),
        }
    }

    /// Set the search depth, rejecting values outside the accepted range.
    pub fn set_depth(&mut self, depth: u8) -> Result<(), SessionError> {
        if !Self::accepts(depth) {
            return Err(SessionError::InvalidDepth {
                value: depth.to_string(),
            });
        }
        self.depth = depth;
        Ok(())
    }

    const fn accepts(depth: u8) -> bool {
        depth >= Self::MIN_DEPTH && depth <= Self::MAX_DEPTH
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { depth: 6 }
    }
}

/// State of a game after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both kings are on the board and Black had a reply.
    InProgress,
    /// The player's move removed Black's king.
    PlayerWins,
    /// The engine's reply removed White's king.
    EngineWins,
    /// Black had no move to answer with.
    Stalemate,
}

impl Outcome {
    /// Return `true` once the game has ended.
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::PlayerWins => "You Win!",
            Outcome::EngineWins => "AI Wins!",
            Outcome::Stalemate => "Stalemate!",
        };
        f.write_str(text)
    }
}

/// What happened during one call to [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The player's move as applied.
    pub player_move: Move,
    /// The engine's reply, if it made one.
    pub reply: Option<Move>,
    /// Game state after the turn.
    pub outcome: Outcome,
}

/// A single game: the player is White, the engine is Black.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: SessionConfig,
    outcome: Outcome,
}

impl Game {
    /// Start a game from the initial position.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(config, Board::starting_position())
    }

    /// Start a game from an arbitrary position, White to move.
    pub fn with_board(config: SessionConfig, board: Board) -> Self {
        Self {
            board,
            config,
            outcome: Outcome::InProgress,
        }
    }

    /// Start a game from placement notation, White to move.
    pub fn from_placement(config: SessionConfig, placement: &str) -> Result<Self, SessionError> {
        Ok(Self::with_board(config, placement.parse()?))
    }

    /// Return to the initial position, keeping the configuration.
    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        self.outcome = Outcome::InProgress;
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// State after the most recent turn.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Symbol-per-cell view of the board, row 0 first.
    pub fn snapshot(&self) -> [[Option<char>; 8]; 8] {
        self.board.symbols()
    }

    /// Play the player's move given in coordinate notation, then let the
    /// engine answer.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn play(&mut self, text: &str) -> Result<Turn, SessionError> {
        if self.outcome.is_over() {
            return Err(SessionError::GameOver);
        }

        let player_move = parse_move(text.trim(), &self.board)?;
        if !self.board.is_legal(player_move, Color::White) {
            return Err(SessionError::IllegalMove {
                notation: player_move.to_coordinate(),
            });
        }
        self.board.apply(player_move);

        let (reply, outcome) = if self.board.is_terminal() {
            (None, Outcome::PlayerWins)
        } else {
            match select_move(&self.board, self.config.depth) {
                None => (None, Outcome::Stalemate),
                Some(reply) => {
                    self.board.apply(reply);
                    let outcome = if self.board.is_terminal() {
                        Outcome::EngineWins
                    } else {
                        Outcome::InProgress
                    };
                    (Some(reply), outcome)
                }
            }
        };

        self.outcome = outcome;
        debug!(
            player = %player_move,
            reply = ?reply.map(|mv| mv.to_coordinate()),
            %outcome,
            "turn played"
        );

        Ok(Turn {
            player_move,
            reply,
            outcome,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
