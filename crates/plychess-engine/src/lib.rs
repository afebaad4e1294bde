//! Move selection for the engine side (Black) by minimax with alpha-beta pruning.

pub mod search;

pub use search::minimax::{INF, SearchContext, minimax};
pub use search::{SearchResult, Searcher, select_move};
