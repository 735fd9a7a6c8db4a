use log::{debug, trace};
use rand::seq::SliceRandom;

use crate::core::algorithms::{Algorithm, MinMaxBot};
use crate::core::checkers::{CheckersBoard, CheckersMove};
use crate::core::connect_four::{ConnectFourBoard, Disc};
use crate::core::definitions::{GameEndState, GameState, InvalidMoveError, Position, Side};
use crate::core::utils::Square;

/// Live game: owns the board that only validated moves may touch.
#[derive(Debug, Clone)]
pub struct Match<P: Position> {
    board: P,
    current_player: Side,
    history: Vec<P::Move>,
    end_state: Option<GameEndState>,
}

pub type CheckersMatch = Match<CheckersBoard>;
pub type ConnectFourMatch = Match<ConnectFourBoard>;

impl<P: Position> Match<P> {
    pub fn new(board: P) -> Self {
        Match::with_player(board, Side::Player)
    }

    pub fn with_player(board: P, player: Side) -> Self {
        let end_state = board.outcome(player);
        Match {
            board,
            current_player: player,
            history: Vec::new(),
            end_state,
        }
    }

    pub fn board(&self) -> &P {
        &self.board
    }

    pub fn current_player(&self) -> Side {
        self.current_player
    }

    pub fn history(&self) -> &[P::Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&P::Move> {
        self.history.last()
    }

    pub fn end_state(&self) -> Option<GameEndState> {
        self.end_state
    }

    pub fn game_ended(&self) -> bool {
        self.end_state.is_some()
    }

    pub fn state(&self) -> GameState {
        match self.end_state {
            Some(end_state) => GameState::Finished(end_state),
            None => GameState::PlayerMove(self.current_player),
        }
    }

    /// Legal moves of the side to move, the same list the AI searches.
    pub fn legal_moves(&self) -> Vec<P::Move> {
        if self.game_ended() {
            Vec::new()
        } else {
            self.board.moves_for_side(self.current_player)
        }
    }

    /// Validates and plays `_move` for the side to move.
    pub fn execute_move(&mut self, _move: P::Move) -> Result<GameState, InvalidMoveError> {
        if self.game_ended() {
            return Err(InvalidMoveError::GameFinished);
        }
        if !self.legal_moves().contains(&_move) {
            return Err(InvalidMoveError::IllegalMove(format!("{:?}", _move)));
        }
        Ok(self.make_move(_move))
    }

    fn make_move(&mut self, _move: P::Move) -> GameState {
        trace!("{} plays {:?}", self.current_player, _move);
        self.board.apply(&_move, self.current_player);
        self.history.push(_move);
        self.current_player = self.current_player.opposite();
        self.end_state = self.board.outcome(self.current_player);
        if let Some(end_state) = self.end_state {
            debug!("Game finished after {} moves: {:?}", self.history.len(), end_state);
        }
        self.state()
    }

    /// Lets `bot` pick the AI move and plays it.
    pub fn make_ai_move<A: Algorithm<P>>(&mut self, bot: &A) -> GameState {
        if self.game_ended() || self.current_player != Side::Ai {
            return self.state();
        }
        match bot.solve(&self.board) {
            Some(_move) => self.make_move(_move),
            None => {
                // only reachable with a board the outcome check missed
                self.end_state = Some(
                    self.board
                        .outcome(Side::Ai)
                        .unwrap_or(GameEndState::Winner(Side::Player)),
                );
                self.state()
            }
        }
    }

    pub fn make_random_move(&mut self) -> GameState {
        if self.game_ended() {
            return self.state();
        }
        let chosen_move = self.legal_moves().choose(&mut rand::thread_rng()).cloned();
        match chosen_move {
            Some(_move) => self.make_move(_move),
            None => {
                self.end_state = Some(GameEndState::Winner(self.current_player.opposite()));
                self.state()
            }
        }
    }
}

impl Match<CheckersBoard> {
    /// Moves of the piece on `square`; empty for a piece the forced
    /// capture rule keeps still, or one of the side not to move.
    pub fn possible_moves(&self, square: Square) -> Vec<CheckersMove> {
        self.legal_moves()
            .into_iter()
            .filter(|_move| _move.from == square)
            .collect()
    }

    pub fn make_minimax_move(&mut self) -> GameState {
        self.make_ai_move(&MinMaxBot::adaptive())
    }
}

impl Match<ConnectFourBoard> {
    /// Cells of the winning four, if the game ended with one.
    pub fn winning_line(&self) -> Option<[Square; 4]> {
        match self.end_state? {
            GameEndState::Winner(side) => self.board.winning_line(Disc::of(side)),
            GameEndState::Draw => None,
        }
    }
}

impl Default for Match<CheckersBoard> {
    fn default() -> Self {
        Match::new(CheckersBoard::new())
    }
}

impl Default for Match<ConnectFourBoard> {
    fn default() -> Self {
        Match::new(ConnectFourBoard::new())
    }
}
