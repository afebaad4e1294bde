//! Move application.

use tracing::trace;

use crate::board::Board;
use crate::castling::{CastleSide, MovedFlags};
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply `mv` in place.
    ///
    /// The move is expected to be legal for this board; validate with
    /// [`is_legal`](Board::is_legal) first. Whatever stands on the
    /// destination is overwritten, which is how captures happen. A king
    /// moving two columns castles and brings the matching rook alongside.
    /// A promoting pawn becomes a queen. If the origin is empty the board is
    /// left unchanged.
    pub fn apply(&mut self, mv: Move) {
        let src = mv.source();
        let dst = mv.dest();
        let Some(piece) = self.get(src) else {
            return;
        };

        self.mark_moved(MovedFlags::touched_by(piece, src));

        if piece.kind() == PieceKind::King && src.col().abs_diff(dst.col()) == 2 {
            let side = CastleSide::from_king_move(src.col(), dst.col());
            let row = src.row();
            let rook_src = Square::at(row, side.rook_col());
            let rook_dst = Square::at(row, side.rook_dest_col());
            let rook = self.get(rook_src);
            self.put(rook_dst, rook);
            self.put(rook_src, None);
            trace!(%rook_src, %rook_dst, ?side, "castling rook relocated");
        }

        self.put(dst, Some(piece));
        self.put(src, None);

        if mv.is_promotion() {
            self.put(dst, Some(Piece::new(PieceKind::Queen, piece.color())));
            trace!(square = %dst, color = %piece.color(), "pawn promoted");
        }
    }

    /// Apply `mv` to a copy and return it. Copy-make: `self` is not modified.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply(mv);
        next
    }
}
