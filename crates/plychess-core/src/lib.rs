//! Core chess types: board representation, pseudo-legal move generation,
//! move application, and static evaluation.

mod attacks;
mod board;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use castling::{CastleSide, MovedFlags};
pub use chess_move::Move;
pub use color::Color;
pub use error::PlacementError;
pub use fen::STARTING_PLACEMENT;
pub use movegen::{MoveList, generate_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
