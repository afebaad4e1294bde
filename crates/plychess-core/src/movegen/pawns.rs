//! Pawn pushes and captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, push_move};

/// Generate pawn moves from `sq`: single push, double push from the start
/// row, then diagonal captures toward the lower and higher column.
pub(super) fn gen_pawn(board: &Board, sq: Square, us: Color, list: &mut MoveList) {
    let dir = us.pawn_direction();

    if let Some(one) = sq.offset(dir, 0).filter(|&s| !board.is_occupied(s)) {
        push_move(board, list, sq, one);

        if sq.row() == us.pawn_start_row()
            && let Some(two) = one.offset(dir, 0).filter(|&s| !board.is_occupied(s))
        {
            push_move(board, list, sq, two);
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = sq.offset(dir, d_col)
            && board.color_on(target) == Some(us.flip())
        {
            push_move(board, list, sq, target);
        }
    }
}
