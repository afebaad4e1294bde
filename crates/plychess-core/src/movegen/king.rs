//! King step and castling generation.

use crate::attacks::KING_OFFSETS;
use crate::board::Board;
use crate::castling::{CastleSide, MovedFlags};
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, push_move};

/// Generate king steps, then castling candidates.
pub(super) fn gen_king(board: &Board, king_sq: Square, us: Color, list: &mut MoveList) {
    for (d_row, d_col) in KING_OFFSETS {
        if let Some(dst) = king_sq.offset(d_row, d_col)
            && board.color_on(dst) != Some(us)
        {
            push_move(board, list, king_sq, dst);
        }
    }

    gen_castling(board, king_sq, us, list);
}

/// Offer castling on each side where the king and that side's rook have
/// never moved, the king is not attacked, the squares between it and the
/// corner are empty, and the two squares the king crosses and lands on are
/// not attacked. Squares are counted from the king; whether the rook still
/// stands in its corner is not checked.
fn gen_castling(board: &Board, king_sq: Square, us: Color, list: &mut MoveList) {
    let them = us.flip();
    let moved = board.moved();
    if moved.contains(MovedFlags::king(us)) {
        return;
    }
    if board.is_square_attacked(king_sq, them) {
        return;
    }

    for side in CastleSide::ALL {
        if !moved.may_castle(us, side) {
            continue;
        }
        let step = side.direction();
        let path_clear = (1..=side.empty_span()).all(|n| {
            king_sq
                .offset(0, n * step)
                .is_some_and(|sq| !board.is_occupied(sq))
        });
        if !path_clear {
            continue;
        }
        let path_safe = (1..=2).all(|n| {
            king_sq
                .offset(0, n * step)
                .is_some_and(|sq| !board.is_square_attacked(sq, them))
        });
        if path_safe && let Some(dst) = king_sq.offset(0, 2 * step) {
            push_move(board, list, king_sq, dst);
        }
    }
}
