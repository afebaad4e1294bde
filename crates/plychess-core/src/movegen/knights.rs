//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, push_move};

/// Generate knight hops from `sq` onto empty or enemy-occupied squares.
pub(super) fn gen_knight(board: &Board, sq: Square, us: Color, list: &mut MoveList) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(dst) = sq.offset(d_row, d_col)
            && board.color_on(dst) != Some(us)
        {
            push_move(board, list, sq, dst);
        }
    }
}
