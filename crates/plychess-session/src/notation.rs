//! Coordinate move notation (`e2e4`).

use plychess_core::{Board, Move, PieceKind, Square};

use crate::error::SessionError;

/// Parse four-character coordinate notation into a [`Move`] on `board`.
///
/// The captured piece is whatever stands on the destination, and the
/// promotion flag is set when a pawn reaches its far row. Legality is not
/// checked here; see [`Board::is_legal`].
pub fn parse_move(text: &str, board: &Board) -> Result<Move, SessionError> {
    let malformed = || SessionError::MalformedMove {
        input: text.to_string(),
    };

    if text.len() != 4 || !text.is_ascii() {
        return Err(malformed());
    }
    let from = Square::from_algebraic(&text[0..2]).ok_or_else(malformed)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(malformed)?;

    let promotion = board.get(from).is_some_and(|piece| {
        piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row()
    });

    Ok(Move::new(from, to, board.get(to), promotion))
}
