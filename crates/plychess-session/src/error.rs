//! Session errors.

use plychess_core::PlacementError;

/// Errors that can occur while driving a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The move text is not four characters of the form `e2e4`.
    #[error("malformed move: {input:?}")]
    MalformedMove {
        /// The text that failed to parse.
        input: String,
    },

    /// The move is well formed but not available to White on this board.
    #[error("illegal move: {notation}")]
    IllegalMove {
        /// The move in coordinate notation.
        notation: String,
    },

    /// A move was submitted after the game already ended.
    #[error("the game is over; start a new one")]
    GameOver,

    /// The search depth is not a number in the accepted range.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth text that was rejected.
        value: String,
    },

    /// A position could not be loaded from placement notation.
    #[error("invalid position: {source}")]
    Placement {
        /// The underlying placement error.
        #[from]
        source: PlacementError,
    },
}
