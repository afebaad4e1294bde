//! Piece kinds and their material weights.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unsigned material weight. The king's weight dwarfs everything else so
    /// that losing it dominates any material sum.
    #[inline]
    pub const fn material(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Return the lowercase symbol for this piece kind.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a symbol (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_symbol(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn material_weights() {
        assert_eq!(PieceKind::Pawn.material(), 1);
        assert_eq!(PieceKind::Knight.material(), 3);
        assert_eq!(PieceKind::Bishop.material(), 3);
        assert_eq!(PieceKind::Rook.material(), 5);
        assert_eq!(PieceKind::Queen.material(), 9);
        assert_eq!(PieceKind::King.material(), 1000);
    }

    #[test]
    fn symbol_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.symbol();
            assert_eq!(PieceKind::from_symbol(c), Some(kind));
            assert_eq!(PieceKind::from_symbol(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_symbol_invalid() {
        assert_eq!(PieceKind::from_symbol('x'), None);
        assert_eq!(PieceKind::from_symbol('1'), None);
    }
}
