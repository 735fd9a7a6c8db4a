use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

pub type Score = i32;

/** Bound larger than any reachable score */
pub const SCORE_INFINITY: Score = i32::MAX;

/** One of the two opponents. The AI is always the maximizing side. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Player,
    Ai,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Side::Ai
    }

    #[inline]
    pub fn from_maximizing(maximizing: bool) -> Side {
        if maximizing {
            Side::Ai
        } else {
            Side::Player
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndState {
    Winner(Side),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    PlayerMove(Side),
    Finished(GameEndState),
}

/// Board of a two-player game that the search engine can explore.
///
/// `apply` and `undo` must be exact inverses: after `undo(apply(m))` the
/// board is identical to what it was before.
pub trait Position: Clone + Debug {
    type Move: Clone + Debug + PartialEq;
    /** Prior cell values needed to take a move back */
    type Undo;

    /// Every legal move for `side`, in search order.
    fn moves_for_side(&self, side: Side) -> Vec<Self::Move>;

    /// Plays a legal move for `side` in place.
    fn apply(&mut self, _move: &Self::Move, side: Side) -> Self::Undo;

    fn undo(&mut self, undo: Self::Undo);

    /// Static score, positive favours the AI.
    fn evaluate(&self) -> Score;

    /// Win/loss score biased by remaining `depth`, `None` for a live board.
    fn terminal_score(&self, depth: u32, maximizing: bool) -> Option<Score>;

    /// Result of the game when `to_move` is about to play.
    fn outcome(&self, to_move: Side) -> Option<GameEndState>;

    fn piece_count(&self) -> usize;

    fn has_moves(&self, side: Side) -> bool {
        !self.moves_for_side(side).is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveError {
    GameFinished,
    IllegalMove(String),
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveError::GameFinished => write!(f, "game is already finished"),
            InvalidMoveError::IllegalMove(_move) => write!(f, "illegal move: {}", _move),
        }
    }
}

impl std::error::Error for InvalidMoveError {}
