//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White is the maximizing side and Black the minimizing side. Scores come
//! straight from [`Board::evaluate`], so they are always from White's
//! perspective.

use plychess_core::{Board, Color};

/// Score bound used for the initial alpha-beta window and as the identity
/// of the max/min folds.
pub const INF: i32 = i32::MAX;

/// Mutable state threaded through one search.
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Positions visited, the root's children included.
    pub nodes: u64,
}

/// Minimax search to `depth` plies.
///
/// Returns the static evaluation at depth 0 or when a king is missing.
/// Otherwise folds over the side to move's pseudo-legal moves, maximizing for
/// White and minimizing for Black, and stops scanning once `beta <= alpha`.
/// A side with no moves yields the fold's identity: `-INF` for White and
/// `INF` for Black.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || board.is_terminal() {
        return board.evaluate();
    }

    let side = if maximizing { Color::White } else { Color::Black };
    let moves = board.generate_moves(side);

    if maximizing {
        let mut best = -INF;
        for mv in &moves {
            let child = board.make_move(*mv);
            let score = minimax(&child, depth - 1, alpha, beta, false, ctx);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in &moves {
            let child = board.make_move(*mv);
            let score = minimax(&child, depth - 1, alpha, beta, true, ctx);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
