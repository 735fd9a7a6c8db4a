pub mod config;
pub mod core;
#[cfg(feature = "worker")]
pub mod worker;

// module re-exports
pub use crate::core::*;

pub use config::{Difficulty, SearchConfig};
pub use crate::core::algorithms::{
    get_best_move, minimax, minimax_exhaustive, Algorithm, MinMaxBot, RandomBot, SearchResult,
    SearchStats, TieBreak,
};
pub use crate::core::checkers::{CheckersBoard, CheckersMove, Piece};
pub use crate::core::connect_four::{ConnectFourBoard, ConnectFourMove, Disc};
pub use crate::core::definitions::{GameEndState, GameState, InvalidMoveError, Position, Score, Side};
pub use crate::core::game::{CheckersMatch, ConnectFourMatch, Match};
pub use crate::core::utils::Square;

/// Legal moves of `side`, the single source of truth for both the AI and the UI.
pub fn moves_for_side<P: Position>(board: &P, side: Side) -> Vec<P::Move> {
    board.moves_for_side(side)
}
