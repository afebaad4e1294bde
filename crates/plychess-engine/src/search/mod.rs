//! Root move selection for the engine side.

pub mod minimax;

use plychess_core::{Board, Color, Move};
use tracing::debug;

use minimax::{INF, SearchContext, minimax};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for Black, or `None` if Black had no moves.
    pub best_move: Option<Move>,
    /// Minimax score of `best_move` from White's perspective. `INF` when
    /// there is no move.
    pub score: i32,
    /// Total positions visited.
    pub nodes: u64,
    /// Requested depth.
    pub depth: u8,
}

/// Fixed-depth searcher that always plays Black.
#[derive(Debug, Default, Clone, Copy)]
pub struct Searcher;

impl Searcher {
    /// Create a searcher.
    pub fn new() -> Self {
        Self
    }

    /// Choose Black's reply on `board`, looking `depth` plies ahead.
    ///
    /// Every Black move is applied to a copy and scored by [`minimax`] with
    /// White to move, `depth - 1` plies deep, over the full window. The move
    /// with the strictly lowest score wins, so ties go to the first move in
    /// generation order. Depth 0 is treated like depth 1. `board` is never
    /// modified.
    pub fn search(&self, board: &Board, depth: u8) -> SearchResult {
        let mut ctx = SearchContext::default();
        let child_depth = depth.saturating_sub(1);

        let mut best: Option<(Move, i32)> = None;
        for mv in board.generate_moves(Color::Black) {
            let child = board.make_move(mv);
            let score = minimax(&child, child_depth, -INF, INF, true, &mut ctx);
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((mv, score));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(INF, |(_, score)| score),
            nodes: ctx.nodes,
            depth,
        };
        debug!(
            depth,
            nodes = result.nodes,
            score = result.score,
            best = ?result.best_move,
            "search complete"
        );
        result
    }
}

/// Choose Black's best move on `board` at `depth`, or `None` if Black has no
/// moves. Shorthand for [`Searcher::search`].
pub fn select_move(board: &Board, depth: u8) -> Option<Move> {
    Searcher::new().search(board, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    #[test]
    fn depth_1_returns_a_black_move() {
        let board = Board::starting_position();
        let result = Searcher::new().search(&board, 1);
        let mv = result.best_move.unwrap();
        assert!(board.is_legal(mv, Color::Black));
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 20);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn ties_go_to_first_generated_move() {
        // Every reply scores 0 at depth 1; the first generated is b8-c6.
        let board = Board::starting_position();
        let mv = select_move(&board, 1).unwrap();
        assert_eq!(mv.to_coordinate(), "b8c6");
    }

    #[test]
    fn depth_zero_behaves_like_depth_one() {
        let board = parse("4k3/8/8/3Q4/8/8/7K/3r4 -");
        assert_eq!(select_move(&board, 0), select_move(&board, 1));
    }

    #[test]
    fn captures_hanging_queen() {
        let board = parse("4k3/8/8/3Q4/8/8/7K/3r4 -");
        let result = Searcher::new().search(&board, 1);
        assert_eq!(result.best_move.unwrap().to_coordinate(), "d1d5");
        assert_eq!(result.score, -5);
    }

    #[test]
    fn no_moves_returns_none() {
        let board = parse("K7/8/8/8/8/8/6pp/6pk -");
        let result = Searcher::new().search(&board, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, INF);
        assert_eq!(select_move(&board, 3), None);
    }

    #[test]
    fn board_is_not_modified() {
        let board = parse("r3k2r/pp3ppp/2n5/3pp3/2B1P3/5N2/PPP2PPP/R3K2R KQkq");
        let copy = board;
        let _ = select_move(&board, 3);
        assert_eq!(board, copy);
    }
}
