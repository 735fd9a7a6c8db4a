use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Position, Score, Side, SCORE_INFINITY};

pub trait Algorithm<P: Position> {
    /// Move for the AI side, `None` when it has nothing to play.
    fn solve(&self, board: &P) -> Option<P::Move>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// How equally scored root moves are told apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Uniform shuffle before scoring, first strict maximum wins.
    #[default]
    Shuffle,
    /// Generator order, first strict maximum wins.
    Ordered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthPolicy {
    Fixed(u32),
    /// Deeper as pieces come off the board, see [`depth_for_pieces`].
    Adaptive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<M> {
    pub best_move: M,
    pub score: Score,
    pub depth: u32,
    pub stats: SearchStats,
}

pub fn depth_for_pieces(pieces: usize) -> u32 {
    match pieces {
        0..=8 => 6,
        9..=12 => 5,
        _ => 4,
    }
}

/// Minimax with alpha-beta pruning over a private copy of `board`.
pub fn minimax<P: Position>(
    board: &P,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Score {
    let mut board = board.clone();
    alpha_beta(
        &mut board,
        depth,
        alpha,
        beta,
        maximizing,
        &mut SearchStats::default(),
    )
}

pub(crate) fn alpha_beta<P: Position>(
    board: &mut P,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;
    if let Some(score) = board.terminal_score(depth, maximizing) {
        return score;
    }
    if depth == 0 {
        return board.evaluate();
    }
    let side = Side::from_maximizing(maximizing);
    let moves = board.moves_for_side(side);
    // full connect four board
    if moves.is_empty() {
        return board.evaluate();
    }

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for _move in &moves {
            let undo = board.apply(_move, side);
            let value = alpha_beta(board, depth - 1, alpha, beta, false, stats);
            board.undo(undo);
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for _move in &moves {
            let undo = board.apply(_move, side);
            let value = alpha_beta(board, depth - 1, alpha, beta, true, stats);
            board.undo(undo);
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Plain minimax visiting the whole tree. Reference for the pruned search.
pub fn minimax_exhaustive<P: Position>(board: &P, depth: u32, maximizing: bool) -> Score {
    fn step<P: Position>(board: &mut P, depth: u32, maximizing: bool) -> Score {
        if let Some(score) = board.terminal_score(depth, maximizing) {
            return score;
        }
        if depth == 0 {
            return board.evaluate();
        }
        let side = Side::from_maximizing(maximizing);
        let moves = board.moves_for_side(side);
        if moves.is_empty() {
            return board.evaluate();
        }
        let scores = moves.iter().map(|_move| {
            let undo = board.apply(_move, side);
            let value = step(&mut *board, depth - 1, !maximizing);
            board.undo(undo);
            value
        });
        let best = if maximizing { scores.max() } else { scores.min() };
        best.unwrap_or_else(|| board.evaluate())
    }

    let mut board = board.clone();
    step(&mut board, depth, maximizing)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinMaxBot {
    depth: DepthPolicy,
    tie_break: TieBreak,
}

impl MinMaxBot {
    pub fn new(max_depth: u32) -> Self {
        MinMaxBot {
            depth: DepthPolicy::Fixed(max_depth),
            tie_break: TieBreak::Shuffle,
        }
    }

    pub fn adaptive() -> Self {
        MinMaxBot {
            depth: DepthPolicy::Adaptive,
            tie_break: TieBreak::Shuffle,
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn depth_for<P: Position>(&self, board: &P) -> u32 {
        match self.depth {
            DepthPolicy::Fixed(depth) => depth,
            DepthPolicy::Adaptive => depth_for_pieces(board.piece_count()),
        }
    }

    pub fn search<P: Position>(&self, board: &P) -> Option<SearchResult<P::Move>> {
        self.search_with_rng(board, &mut rand::thread_rng())
    }

    /// Scores every AI candidate one ply below the root.
    ///
    /// The root is not pruned, each candidate gets a full window so its
    /// true score is known. The caller's board is only read.
    pub fn search_with_rng<P: Position, R: Rng + ?Sized>(
        &self,
        board: &P,
        rng: &mut R,
    ) -> Option<SearchResult<P::Move>> {
        let mut candidates = board.moves_for_side(Side::Ai);
        if candidates.is_empty() {
            debug!("AI has no legal move, nothing to search");
            return None;
        }
        if self.tie_break == TieBreak::Shuffle {
            candidates.shuffle(rng);
        }

        let depth = self.depth_for(board);
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let mut best: Option<(Score, P::Move)> = None;
        for _move in candidates {
            let undo = scratch.apply(&_move, Side::Ai);
            let score = alpha_beta(
                &mut scratch,
                depth.saturating_sub(1),
                -SCORE_INFINITY,
                SCORE_INFINITY,
                false,
                &mut stats,
            );
            scratch.undo(undo);
            trace!("Candidate {:?} scored {}", _move, score);
            if best
                .as_ref()
                .map_or(true, |(best_score, _)| score > *best_score)
            {
                best = Some((score, _move));
            }
        }

        let (score, best_move) = best?;
        debug!(
            "Chosen {:?} with score {} at depth {} ({} nodes, {} cutoffs)",
            best_move, score, depth, stats.nodes, stats.cutoffs
        );
        Some(SearchResult {
            best_move,
            score,
            depth,
            stats,
        })
    }
}

impl<P: Position> Algorithm<P> for MinMaxBot {
    fn solve(&self, board: &P) -> Option<P::Move> {
        self.search(board).map(|result| result.best_move)
    }
}

/// Plays any legal move, uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl<P: Position> Algorithm<P> for RandomBot {
    fn solve(&self, board: &P) -> Option<P::Move> {
        board
            .moves_for_side(Side::Ai)
            .choose(&mut rand::thread_rng())
            .cloned()
    }
}

/// Best AI move searched `depth` plies deep, ties broken at random.
pub fn get_best_move<P: Position>(board: &P, depth: u32) -> Option<P::Move> {
    MinMaxBot::new(depth).solve(board)
}
