//! The twelve colored pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// There are exactly twelve values of this type, exposed as associated
/// constants. Pieces carry no identity beyond kind and color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);

    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);

    /// All twelve pieces, White first.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_KING,
        Self::WHITE_QUEEN,
        Self::WHITE_ROOK,
        Self::WHITE_BISHOP,
        Self::WHITE_KNIGHT,
        Self::WHITE_PAWN,
        Self::BLACK_KING,
        Self::BLACK_QUEEN,
        Self::BLACK_ROOK,
        Self::BLACK_BISHOP,
        Self::BLACK_KNIGHT,
        Self::BLACK_PAWN,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a display symbol: uppercase is White, lowercase is Black.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color, Color::White)
    }

    /// Signed material value: positive for White, negative for Black.
    #[inline]
    pub const fn value(self) -> i32 {
        match self.color {
            Color::White => self.kind.material(),
            Color::Black => -self.kind.material(),
        }
    }

    /// Single-character symbol, uppercase for White and lowercase for Black.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.symbol().to_ascii_uppercase())
    }
}
