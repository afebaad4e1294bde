//! Board squares addressed by row and column.

use std::fmt;

/// A square on the 8x8 grid, stored as `row * 8 + col`.
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's back rank
/// (rank 1). Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    pub const A8: Square = Square::at(0, 0);
    pub const B8: Square = Square::at(0, 1);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);

    pub const A1: Square = Square::at(7, 0);
    pub const B1: Square = Square::at(7, 1);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);

    /// Create a square from signed coordinates, returning `None` when either
    /// coordinate falls off the board.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Create a square from in-range coordinates.
    #[inline]
    pub(crate) const fn at(row: usize, col: usize) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square((row * 8 + col) as u8)
    }

    /// Parse algebraic notation (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let col = (file_byte - b'a') as i32;
        let row = 8 - (rank_byte - b'0') as i32;
        Square::new(row, col)
    }

    #[inline]
    pub const fn row(self) -> usize {
        (self.0 / 8) as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Return the zero-based index (0..63), row-major.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a row/column delta, returning `None` off the board.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        Square::new(self.row() as i32 + d_row, self.col() as i32 + d_col)
    }

    /// Iterate all 64 squares in row-major order, starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Return the algebraic notation of this square (e.g. "e4").
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'8' - self.row() as u8) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.to_algebraic(), self.row(), self.col())
    }
}
