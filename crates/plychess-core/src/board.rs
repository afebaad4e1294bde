//! The chess board: an 8x8 grid of optional pieces plus castling flags.

use std::fmt;

use crate::castling::MovedFlags;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete game state.
///
/// `Board` is `Copy`: every copy owns its own grid and flags, so a copy can
/// be mutated freely without affecting the original.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed `[row][col]`, row 0 being Black's back rank.
    grid: [[Option<Piece>; 8]; 8],
    /// Which kings and corner rooks have moved.
    moved: MovedFlags,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        const BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for col in 0..8 {
            for color in Color::ALL {
                board.grid[color.back_row()][col] = Some(Piece::new(BACK[col], color));
                board.grid[color.pawn_start_row()][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return a board with no pieces and no moved flags set.
    pub const fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            moved: MovedFlags::NONE,
        }
    }

    /// Return the piece at signed coordinates, or `None` when the cell is
    /// empty or off the board.
    #[inline]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.get(sq))
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row()][sq.col()]
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    ///
    /// Does not touch the moved flags.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.row()][sq.col()] = piece;
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Return the moved flags.
    #[inline]
    pub fn moved(&self) -> MovedFlags {
        self.moved
    }

    /// Set additional moved flags. Flags already set stay set.
    #[inline]
    pub(crate) fn mark_moved(&mut self, flags: MovedFlags) {
        self.moved = self.moved.insert(flags);
    }

    /// Iterate occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of the king for `color`, if it is still on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, piece)| piece == king).map(|(sq, _)| sq)
    }

    /// Sum of all present pieces' signed material values.
    ///
    /// Positive favors White, negative favors Black.
    pub fn evaluate(&self) -> i32 {
        self.pieces().map(|(_, piece)| piece.value()).sum()
    }

    /// Return `true` once either king has been captured.
    ///
    /// This is the only game-ending condition the board knows about.
    pub fn is_terminal(&self) -> bool {
        self.king_square(Color::White).is_none() || self.king_square(Color::Black).is_none()
    }

    /// Symbol for every cell, `None` for empty cells, indexed `[row][col]`.
    pub fn symbols(&self) -> [[Option<char>; 8]; 8] {
        self.grid.map(|row| row.map(|cell| cell.map(Piece::symbol)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.grid.iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::symbol);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
