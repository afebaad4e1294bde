//! Movement geometry and square-attack detection.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Knight hops as `(row, col)` deltas.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Rook rays.
pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop rays.
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen rays: straight first, then diagonal.
pub const ALL_RAYS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// King steps, scanned row delta first.
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Walk from `from` along `dir` and return the first occupied square,
    /// its piece, and the distance travelled.
    pub(crate) fn first_occupant(&self, from: Square, dir: (i32, i32)) -> Option<(Square, Piece, i32)> {
        let mut distance = 1;
        let mut sq = from.offset(dir.0, dir.1)?;
        loop {
            if let Some(piece) = self.get(sq) {
                return Some((sq, piece, distance));
            }
            distance += 1;
            sq = sq.offset(dir.0, dir.1)?;
        }
    }

    /// Return `true` if any piece of `by_color` could move to `sq` by its
    /// ordinary movement rule.
    ///
    /// Pawns count only their diagonal capture pattern. Sliding attacks stop
    /// at the first occupant along each ray.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        // A pawn attacking `sq` stands one row behind it, from the attacker's view.
        let pawn = Piece::new(PieceKind::Pawn, by_color);
        let behind = -by_color.pawn_direction();
        if [-1, 1]
            .into_iter()
            .any(|d_col| sq.offset(behind, d_col).and_then(|s| self.get(s)) == Some(pawn))
        {
            return true;
        }

        let knight = Piece::new(PieceKind::Knight, by_color);
        if KNIGHT_OFFSETS
            .into_iter()
            .any(|(dr, dc)| sq.offset(dr, dc).and_then(|s| self.get(s)) == Some(knight))
        {
            return true;
        }

        ALL_RAYS.into_iter().any(|dir| {
            let Some((_, piece, distance)) = self.first_occupant(sq, dir) else {
                return false;
            };
            if piece.color() != by_color {
                return false;
            }
            let straight = dir.0 == 0 || dir.1 == 0;
            match piece.kind() {
                PieceKind::Queen => true,
                PieceKind::Rook => straight,
                PieceKind::Bishop => !straight,
                PieceKind::King => distance == 1,
                PieceKind::Pawn | PieceKind::Knight => false,
            }
        })
    }

    /// Coordinate form of [`is_square_attacked`](Self::is_square_attacked).
    /// Off-board coordinates are never attacked.
    pub fn is_attacked_at(&self, row: i32, col: i32, by_color: Color) -> bool {
        Square::new(row, col).is_some_and(|sq| self.is_square_attacked(sq, by_color))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn parse(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    #[test]
    fn starting_position_attacks() {
        let board = Board::starting_position();
        // Pawns guard the third rank; knights reach it too.
        assert!(board.is_square_attacked(sq("e3"), Color::White));
        assert!(board.is_square_attacked(sq("f6"), Color::Black));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        assert!(!board.is_square_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn pawn_attacks_diagonally_not_forward() {
        let board = parse("4k3/8/8/8/8/8/4P3/4K3 -");
        assert!(board.is_square_attacked(sq("d3"), Color::White));
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(!board.is_square_attacked(sq("e3"), Color::White));

        let board = parse("4k3/4p3/8/8/8/8/8/4K3 -");
        assert!(board.is_square_attacked(sq("d6"), Color::Black));
        assert!(board.is_square_attacked(sq("f6"), Color::Black));
        assert!(!board.is_square_attacked(sq("e6"), Color::Black));
        assert!(!board.is_square_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn knight_hops() {
        let board = parse("4k3/8/8/8/3N4/8/8/4K3 -");
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(board.is_square_attacked(sq(target), Color::White), "{target}");
        }
        assert!(!board.is_square_attacked(sq("d5"), Color::White));
    }

    #[test]
    fn sliders_respect_geometry_and_blockers() {
        let board = parse("4k3/8/8/8/R2p3b/8/8/4K3 -");
        // Rook on a4 sees b4, c4, d4 (blocker) but not beyond.
        assert!(board.is_square_attacked(sq("c4"), Color::White));
        assert!(board.is_square_attacked(sq("d4"), Color::White));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        // Rook does not attack diagonally.
        assert!(!board.is_square_attacked(sq("b5"), Color::White));
        // Bishop on h4 attacks along diagonals only.
        assert!(board.is_square_attacked(sq("e1"), Color::Black));
        assert!(board.is_square_attacked(sq("e7"), Color::Black));
        assert!(!board.is_square_attacked(sq("g4"), Color::Black));
    }

    #[test]
    fn queen_covers_both_geometries() {
        let board = parse("4k3/8/8/8/3Q4/8/8/4K3 -");
        assert!(board.is_square_attacked(sq("d8"), Color::White));
        assert!(board.is_square_attacked(sq("h8"), Color::White));
        assert!(board.is_square_attacked(sq("a4"), Color::White));
        assert!(!board.is_square_attacked(sq("e6"), Color::White));
    }

    #[test]
    fn king_attacks_only_adjacent() {
        let board = parse("4k3/8/8/8/8/8/8/4K3 -");
        assert!(board.is_square_attacked(sq("d2"), Color::White));
        assert!(board.is_square_attacked(sq("f1"), Color::White));
        assert!(!board.is_square_attacked(sq("e3"), Color::White));
    }

    #[test]
    fn own_pieces_do_not_count() {
        let board = parse("4k3/8/8/8/8/8/8/R3K3 -");
        assert!(!board.is_square_attacked(sq("a4"), Color::Black));
        assert!(board.is_square_attacked(sq("a4"), Color::White));
    }

    #[test]
    fn off_board_is_never_attacked() {
        let board = Board::starting_position();
        assert!(!board.is_attacked_at(-1, 3, Color::White));
        assert!(board.is_attacked_at(5, 4, Color::White));
    }
}
