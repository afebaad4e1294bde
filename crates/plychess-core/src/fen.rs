//! Placement notation parsing and serialization for [`Board`].
//!
//! The accepted form is the first field of FEN, listing rows from Black's
//! back rank down to White's, optionally followed by a castling field.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castling::MovedFlags;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement notation for the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR KQkq";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(PlacementError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_symbol(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    if col < 8 {
                        board.put(Square::at(row, col), Some(piece));
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        let moved = match fields.get(1) {
            Some(field) => MovedFlags::from_castling_field(field)?,
            None => MovedFlags::NONE,
        };
        board.mark_moved(moved);

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            let mut empty_count = 0u8;
            for col in 0..8 {
                match self.get(Square::at(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.symbol())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.moved())
    }
}
