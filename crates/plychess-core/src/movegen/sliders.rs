//! Bishop, rook, and queen move generation by ray casting.

use crate::attacks::{ALL_RAYS, DIAGONAL, ORTHOGONAL};
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, push_move};

/// Ray directions for a sliding piece kind.
fn rays(kind: PieceKind) -> &'static [(i32, i32)] {
    match kind {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen => &ALL_RAYS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// Cast every ray of `piece` from `sq`. Empty squares are added and the ray
/// continues; an enemy piece is added and ends the ray; a friendly piece
/// ends the ray without being added.
pub(super) fn gen_slider(board: &Board, sq: Square, piece: Piece, list: &mut MoveList) {
    let us = piece.color();
    for &(d_row, d_col) in rays(piece.kind()) {
        let mut next = sq.offset(d_row, d_col);
        while let Some(dst) = next {
            match board.color_on(dst) {
                None => push_move(board, list, sq, dst),
                Some(color) => {
                    if color != us {
                        push_move(board, list, sq, dst);
                    }
                    break;
                }
            }
            next = dst.offset(d_row, d_col);
        }
    }
}
