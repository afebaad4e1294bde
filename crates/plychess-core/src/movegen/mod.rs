//! Pseudo-legal move generation.
//!
//! Moves obey each piece's movement rule and never land on a friendly piece,
//! but are not filtered for leaving the mover's own king capturable.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Growable buffer of generated moves, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Return `true` if a move with the same origin and destination is listed.
    pub fn contains_squares(&self, mv: Move) -> bool {
        self.moves.iter().any(|m| m.same_squares(mv))
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Record a move from `from` to `to`, filling in the captured piece and the
/// promotion flag from the current board.
pub(super) fn push_move(board: &Board, list: &mut MoveList, from: Square, to: Square) {
    let promotion = board.get(from).is_some_and(|piece| {
        piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row()
    });
    list.push(Move::new(from, to, board.get(to), promotion));
}

/// Generate every pseudo-legal move for `color`.
///
/// Squares are scanned row by row from a8 to h1; the order is stable and
/// the search relies on it for tie-breaking.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (sq, piece) in board.pieces() {
        if piece.color() != color {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, sq, color, &mut list),
            PieceKind::Knight => gen_knight(board, sq, color, &mut list),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                gen_slider(board, sq, piece, &mut list)
            }
            PieceKind::King => gen_king(board, sq, color, &mut list),
        }
    }
    list
}

impl Board {
    /// Every pseudo-legal move for `color`. See [`generate_moves`].
    #[inline]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        generate_moves(self, color)
    }

    /// Return `true` if a move with `mv`'s origin and destination is among
    /// the pseudo-legal moves for `color`.
    ///
    /// King safety is not considered beyond the castling rules.
    pub fn is_legal(&self, mv: Move, color: Color) -> bool {
        generate_moves(self, color).contains_squares(mv)
    }
}
