//! Move records.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

/// A single move: origin, destination, what stood on the destination
/// beforehand, and whether a pawn promotes.
///
/// Moves are plain values. Castling is an ordinary king move spanning two
/// columns; the board recognizes it when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Piece>,
    promotion: bool,
}

impl Move {
    /// Create a move.
    pub const fn new(from: Square, to: Square, captured: Option<Piece>, promotion: bool) -> Move {
        Move {
            from,
            to,
            captured,
            promotion,
        }
    }

    /// Create a bare move from four signed coordinates, with no capture and
    /// no promotion recorded. Returns `None` if any coordinate is off the board.
    pub const fn from_coords(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Option<Move> {
        match (Square::new(from_row, from_col), Square::new(to_row, to_col)) {
            (Some(from), Some(to)) => Some(Move::new(from, to, None, false)),
            _ => None,
        }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.to
    }

    /// The piece that occupied the destination before the move, if any.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion
    }

    /// Return `true` if both moves share origin and destination.
    #[inline]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    /// Four-character coordinate notation, e.g. `e2e4`.
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(piece) = self.captured {
            write!(f, " x{piece}")?;
        }
        if self.promotion {
            write!(f, " =Q")?;
        }
        write!(f, ")")
    }
}
