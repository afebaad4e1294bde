//! Human-versus-engine game sessions: the human plays White in coordinate
//! notation, the engine answers as Black.

pub mod command;
pub mod error;
pub mod game;
pub mod notation;

pub use command::{Command, parse_command};
pub use error::SessionError;
pub use game::{Game, Outcome, SessionConfig, Turn};
pub use notation::parse_move;
