//! Castling geometry and the "has moved" flags that gate it.

use std::fmt;

use crate::color::Color;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, in the order castling moves are generated.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of the rook's starting corner.
    #[inline]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, beside the king's destination.
    #[inline]
    pub const fn rook_dest_col(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column step from the king toward this side's rook.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Number of squares next to the king, toward the rook, that must be
    /// empty. The first two are also the squares the king crosses and lands
    /// on, which must not be attacked.
    #[inline]
    pub const fn empty_span(self) -> i32 {
        match self {
            CastleSide::KingSide => 2,
            CastleSide::QueenSide => 3,
        }
    }

    /// Infer the side from a two-column king move.
    #[inline]
    pub const fn from_king_move(from_col: usize, to_col: usize) -> CastleSide {
        if to_col > from_col {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }
}

/// Six flags recording whether each king and each corner rook has ever
/// moved. Flags are only ever set, never cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovedFlags(u8);

impl MovedFlags {
    /// Nothing has moved.
    pub const NONE: MovedFlags = MovedFlags(0);
    /// Everything has moved; no castling is possible.
    pub const ALL: MovedFlags = MovedFlags(0b11_1111);

    pub const WHITE_KING: MovedFlags = MovedFlags(0b00_0001);
    pub const BLACK_KING: MovedFlags = MovedFlags(0b00_0010);
    pub const WHITE_KINGSIDE_ROOK: MovedFlags = MovedFlags(0b00_0100);
    pub const WHITE_QUEENSIDE_ROOK: MovedFlags = MovedFlags(0b00_1000);
    pub const BLACK_KINGSIDE_ROOK: MovedFlags = MovedFlags(0b01_0000);
    pub const BLACK_QUEENSIDE_ROOK: MovedFlags = MovedFlags(0b10_0000);

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: MovedFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new flags with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: MovedFlags) -> MovedFlags {
        MovedFlags(self.0 | other.0)
    }

    /// Flag for the king of `color`.
    #[inline]
    pub const fn king(color: Color) -> MovedFlags {
        match color {
            Color::White => Self::WHITE_KING,
            Color::Black => Self::BLACK_KING,
        }
    }

    /// Flag for the corner rook of `color` on `side`.
    #[inline]
    pub const fn rook(color: Color, side: CastleSide) -> MovedFlags {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KINGSIDE_ROOK,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEENSIDE_ROOK,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KINGSIDE_ROOK,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEENSIDE_ROOK,
        }
    }

    /// Return `true` if neither the king of `color` nor its rook on `side`
    /// has moved.
    #[inline]
    pub const fn may_castle(self, color: Color, side: CastleSide) -> bool {
        (self.0 & (Self::king(color).0 | Self::rook(color, side).0)) == 0
    }

    /// Flags a move of `piece` from `from` sets: any move of a king, or a
    /// rook leaving its own starting corner.
    pub const fn touched_by(piece: Piece, from: Square) -> MovedFlags {
        let color = piece.color();
        match piece.kind() {
            PieceKind::King => Self::king(color),
            PieceKind::Rook if from.row() == color.back_row() => match from.col() {
                7 => Self::rook(color, CastleSide::KingSide),
                0 => Self::rook(color, CastleSide::QueenSide),
                _ => Self::NONE,
            },
            _ => Self::NONE,
        }
    }

    /// Build flags from a castling field (`"KQkq"`, `"Kq"`, `"-"`).
    ///
    /// A missing letter marks that rook as moved. A side with neither letter
    /// has its king marked as moved.
    pub fn from_castling_field(s: &str) -> Result<MovedFlags, PlacementError> {
        let mut granted = [[false; 2]; Color::COUNT];
        if s != "-" {
            for c in s.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::KingSide),
                    'Q' => (Color::White, CastleSide::QueenSide),
                    'k' => (Color::Black, CastleSide::KingSide),
                    'q' => (Color::Black, CastleSide::QueenSide),
                    _ => return Err(PlacementError::InvalidCastlingChar { character: c }),
                };
                granted[color.index()][side as usize] = true;
            }
        }

        let mut flags = MovedFlags::NONE;
        for color in Color::ALL {
            let [king_side, queen_side] = granted[color.index()];
            if !king_side {
                flags = flags.insert(Self::rook(color, CastleSide::KingSide));
            }
            if !queen_side {
                flags = flags.insert(Self::rook(color, CastleSide::QueenSide));
            }
            if !king_side && !queen_side {
                flags = flags.insert(Self::king(color));
            }
        }
        Ok(flags)
    }
}

impl Default for MovedFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for MovedFlags {
    /// Castling field for the sides still able to castle, or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        let mut any = false;
        for (color, side, c) in letters {
            if self.may_castle(color, side) {
                write!(f, "{c}")?;
                any = true;
            }
        }
        if !any {
            write!(f, "-")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MovedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovedFlags({:06b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleSide, MovedFlags};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn insert_is_monotonic() {
        let flags = MovedFlags::NONE
            .insert(MovedFlags::WHITE_KING)
            .insert(MovedFlags::WHITE_KING);
        assert!(flags.contains(MovedFlags::WHITE_KING));
        assert!(!flags.contains(MovedFlags::BLACK_KING));
        assert_eq!(flags.insert(MovedFlags::NONE), flags);
    }

    #[test]
    fn may_castle_requires_king_and_rook() {
        let flags = MovedFlags::NONE;
        assert!(flags.may_castle(Color::White, CastleSide::KingSide));

        let rook_moved = flags.insert(MovedFlags::WHITE_KINGSIDE_ROOK);
        assert!(!rook_moved.may_castle(Color::White, CastleSide::KingSide));
        assert!(rook_moved.may_castle(Color::White, CastleSide::QueenSide));

        let king_moved = flags.insert(MovedFlags::BLACK_KING);
        assert!(!king_moved.may_castle(Color::Black, CastleSide::KingSide));
        assert!(!king_moved.may_castle(Color::Black, CastleSide::QueenSide));
        assert!(king_moved.may_castle(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn touched_by_corner_rooks_and_kings() {
        assert_eq!(
            MovedFlags::touched_by(Piece::WHITE_ROOK, Square::H1),
            MovedFlags::WHITE_KINGSIDE_ROOK
        );
        assert_eq!(
            MovedFlags::touched_by(Piece::BLACK_ROOK, Square::A8),
            MovedFlags::BLACK_QUEENSIDE_ROOK
        );
        assert_eq!(
            MovedFlags::touched_by(Piece::BLACK_KING, Square::D8),
            MovedFlags::BLACK_KING
        );
        // A white rook on Black's corner is not a starting-position rook.
        assert_eq!(MovedFlags::touched_by(Piece::WHITE_ROOK, Square::H8), MovedFlags::NONE);
        assert_eq!(MovedFlags::touched_by(Piece::WHITE_QUEEN, Square::D1), MovedFlags::NONE);
    }

    #[test]
    fn castling_field_roundtrip() {
        for field in ["KQkq", "Kq", "Q", "k", "-"] {
            let flags = MovedFlags::from_castling_field(field).unwrap();
            assert_eq!(flags.to_string(), field);
        }
        assert_eq!(MovedFlags::from_castling_field("-").unwrap(), MovedFlags::ALL);
        assert_eq!(MovedFlags::from_castling_field("KQkq").unwrap(), MovedFlags::NONE);
    }

    #[test]
    fn castling_field_rejects_unknown_letters() {
        assert!(MovedFlags::from_castling_field("KX").is_err());
    }

    #[test]
    fn geometry() {
        assert_eq!(CastleSide::KingSide.rook_col(), 7);
        assert_eq!(CastleSide::KingSide.rook_dest_col(), 5);
        assert_eq!(CastleSide::QueenSide.rook_col(), 0);
        assert_eq!(CastleSide::QueenSide.rook_dest_col(), 3);
        assert_eq!(CastleSide::KingSide.direction() * CastleSide::KingSide.empty_span(), 2);
        assert_eq!(CastleSide::QueenSide.direction() * CastleSide::QueenSide.empty_span(), -3);
        assert_eq!(CastleSide::from_king_move(4, 6), CastleSide::KingSide);
        assert_eq!(CastleSide::from_king_move(4, 2), CastleSide::QueenSide);
    }
}
