//! Perft (performance test) for move generation verification.

use crate::board::Board;
use crate::color::Color;

/// Count leaf nodes of the pseudo-legal move tree `depth` plies deep, with
/// `side` to move first and colours alternating each ply.
///
/// Depth 0 returns 1 (the current position). Depth 1 bulk-counts the
/// generated moves without applying them.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_moves(side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let child = board.make_move(*mv);
        nodes += perft(&child, !side, depth - 1);
    }
    nodes
}

/// Run perft with a per-move breakdown.
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = board
        .generate_moves(side)
        .into_iter()
        .map(|mv| {
            let child = board.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, !side, depth - 1) };
            (mv.to_coordinate(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
