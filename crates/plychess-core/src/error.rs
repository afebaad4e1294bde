//! Error types for placement-notation parsing.

/// Errors that occur when parsing board placement notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The input has no placement field, or more than placement + castling.
    #[error("expected a placement field and an optional castling field, found {found} fields")]
    WrongFieldCount {
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// The placement field does not have exactly 8 rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = Black's back rank).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::PlacementError;

    #[test]
    fn display() {
        let err = PlacementError::WrongRowCount { found: 7 };
        assert_eq!(err.to_string(), "expected 8 rows in piece placement, found 7");

        let err = PlacementError::BadRowLength { row: 2, length: 9 };
        assert_eq!(err.to_string(), "row 2 describes 9 squares, expected 8");
    }
}
