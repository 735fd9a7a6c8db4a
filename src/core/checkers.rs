use std::fmt::{Debug, Display};

use log::trace;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::core::algorithms::depth_for_pieces;
use crate::core::definitions::{GameEndState, Position, Score, Side};
use crate::core::utils::{Square, Step, DOWN_DIR, KING_DIR, UP_DIR};

pub const BOARD_SIZE: u8 = 8;

/** Base score of a forced win, biased by the remaining depth */
pub const CHECKERS_WIN: Score = 10_000;

const MAN_VALUE: Score = 10;
const KING_VALUE: Score = 25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    PlayerMan,
    PlayerKing,
    AiMan,
    AiKing,
}

impl Piece {
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::PlayerMan | Piece::PlayerKing => Some(Side::Player),
            Piece::AiMan | Piece::AiKing => Some(Side::Ai),
            Piece::Empty => None,
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Piece::PlayerKing | Piece::AiKing)
    }

    /// Kings move along every diagonal, men only forward.
    pub fn directions(self) -> &'static [Step] {
        match self {
            Piece::PlayerKing | Piece::AiKing => KING_DIR,
            Piece::PlayerMan => UP_DIR,
            Piece::AiMan => DOWN_DIR,
            Piece::Empty => &[],
        }
    }

    /// The piece as it stands after landing on `row`.
    pub fn landed_on(self, row: u8) -> Piece {
        match self {
            Piece::PlayerMan if row == 0 => Piece::PlayerKing,
            Piece::AiMan if row == BOARD_SIZE - 1 => Piece::AiKing,
            piece => piece,
        }
    }

    /// Same rank, other side.
    pub fn swapped(self) -> Piece {
        match self {
            Piece::PlayerMan => Piece::AiMan,
            Piece::PlayerKing => Piece::AiKing,
            Piece::AiMan => Piece::PlayerMan,
            Piece::AiKing => Piece::PlayerKing,
            Piece::Empty => Piece::Empty,
        }
    }

    fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::PlayerMan => 'p',
            Piece::PlayerKing => 'P',
            Piece::AiMan => 'a',
            Piece::AiKing => 'A',
        }
    }

    fn from_symbol(symbol: char) -> Option<Piece> {
        Some(match symbol {
            '.' | ' ' | '_' => Piece::Empty,
            'p' => Piece::PlayerMan,
            'P' => Piece::PlayerKing,
            'a' => Piece::AiMan,
            'A' => Piece::AiKing,
            _ => return None,
        })
    }
}

/** A jump chain lists every captured square in order, a simple move none */
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersMove {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Square>,
}

impl CheckersMove {
    pub fn simple(from: Square, to: Square) -> Self {
        CheckersMove {
            from,
            to,
            captured: Vec::new(),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl Display for CheckersMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.from)?;
        if self.is_capture() {
            for square in &self.captured {
                write!(f, "x{}", square)?;
            }
            write!(f, "->{}", self.to)
        } else {
            write!(f, "-{}", self.to)
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckersUndo {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Vec<(Square, Piece)>,
}

/** 8x8 board, pieces only ever stand on dark squares */
#[serde_as]
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckersBoard {
    #[serde_as(as = "[_; 64]")]
    cells: [Piece; 64],
}

#[inline]
fn index(square: Square) -> usize {
    square.row as usize * BOARD_SIZE as usize + square.col as usize
}

#[inline]
pub fn is_dark(square: Square) -> bool {
    (square.row + square.col) % 2 == 1
}

impl CheckersBoard {
    pub fn empty() -> CheckersBoard {
        CheckersBoard {
            cells: [Piece::Empty; 64],
        }
    }

    /// Opening setup: AI men on the top three rows, player men on the bottom three.
    pub fn new() -> CheckersBoard {
        let mut board = CheckersBoard::empty();
        for square in board.squares().filter(|square| is_dark(*square)) {
            match square.row {
                0..=2 => board.set(square, Piece::AiMan),
                5..=7 => board.set(square, Piece::PlayerMan),
                _ => (),
            }
        }
        board
    }

    /// Parses eight rows of `.`, `p`, `P`, `a`, `A`, top row first.
    pub fn from_rows(rows: &[&str]) -> Option<CheckersBoard> {
        if rows.len() != BOARD_SIZE as usize {
            return None;
        }
        let mut board = CheckersBoard::empty();
        for (row, line) in rows.iter().enumerate() {
            let pieces: Vec<_> = line.chars().map(Piece::from_symbol).collect::<Option<_>>()?;
            if pieces.len() != BOARD_SIZE as usize {
                return None;
            }
            for (col, piece) in pieces.into_iter().enumerate() {
                board.set(Square::new(row as u8, col as u8), piece);
            }
        }
        Some(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Piece {
        self.cells[index(square)]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.cells[index(square)] = piece;
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .filter(move |square| self.get(*square).side() == Some(side))
    }

    /// Board turned half a circle with the sides swapped.
    pub fn mirrored(&self) -> CheckersBoard {
        let mut board = CheckersBoard::empty();
        for square in self.squares() {
            let target = Square::new(BOARD_SIZE - 1 - square.row, BOARD_SIZE - 1 - square.col);
            board.set(target, self.get(square).swapped());
        }
        board
    }

    fn jump(&self, at: Square, step: Step, piece: Piece) -> Option<(Square, Square)> {
        let over = at.offset(step, BOARD_SIZE, BOARD_SIZE)?;
        let landing = over.offset(step, BOARD_SIZE, BOARD_SIZE)?;
        let opponent = piece.side().map(Side::opposite);
        if self.get(over).side() == opponent && self.get(landing) == Piece::Empty {
            Some((over, landing))
        } else {
            None
        }
    }

    /// Pushes every maximal jump chain of `piece` standing on `at`.
    ///
    /// The board is edited in place while probing and restored before
    /// returning. A man that promotes stops its chain on the promotion row.
    fn collect_captures(
        &mut self,
        origin: Square,
        at: Square,
        piece: Piece,
        path: &mut Vec<Square>,
        out: &mut Vec<CheckersMove>,
    ) {
        for &step in piece.directions() {
            let Some((over, landing)) = self.jump(at, step, piece) else {
                continue;
            };
            let victim = self.get(over);
            let landed = piece.landed_on(landing.row);
            self.set(at, Piece::Empty);
            self.set(over, Piece::Empty);
            self.set(landing, landed);
            path.push(over);

            let found = out.len();
            if landed == piece {
                self.collect_captures(origin, landing, landed, path, out);
            }
            if out.len() == found {
                out.push(CheckersMove {
                    from: origin,
                    to: landing,
                    captured: path.clone(),
                });
            }

            path.pop();
            self.set(landing, Piece::Empty);
            self.set(over, victim);
            self.set(at, piece);
        }
    }

    fn collect_simple(&self, from: Square, piece: Piece, out: &mut Vec<CheckersMove>) {
        for &step in piece.directions() {
            if let Some(to) = from.offset(step, BOARD_SIZE, BOARD_SIZE) {
                if self.get(to) == Piece::Empty {
                    out.push(CheckersMove::simple(from, to));
                }
            }
        }
    }

    /// Legal moves starting on `from` for the owner of that piece.
    pub fn moves_from(&self, from: Square) -> Vec<CheckersMove> {
        match self.get(from).side() {
            Some(side) => self
                .moves_for_side(side)
                .into_iter()
                .filter(|_move| _move.from == from)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for CheckersBoard {
    fn default() -> Self {
        CheckersBoard::new()
    }
}

impl Display for CheckersBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(Square::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for CheckersBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckersBoard\n{}", self)
    }
}

impl Position for CheckersBoard {
    type Move = CheckersMove;
    type Undo = CheckersUndo;

    /// Captures are mandatory: as soon as any piece of `side` can jump,
    /// only jump chains are returned.
    fn moves_for_side(&self, side: Side) -> Vec<CheckersMove> {
        let mut scratch = self.clone();
        let mut captures = Vec::new();
        let mut simple = Vec::new();
        let mut path = Vec::with_capacity(12);
        for from in self.squares_of(side) {
            let piece = self.get(from);
            scratch.collect_captures(from, from, piece, &mut path, &mut captures);
            if captures.is_empty() {
                self.collect_simple(from, piece, &mut simple);
            }
        }
        if captures.is_empty() {
            simple
        } else {
            captures
        }
    }

    fn has_moves(&self, side: Side) -> bool {
        self.squares_of(side).any(|from| {
            let piece = self.get(from);
            piece.directions().iter().any(|&step| {
                matches!(
                    from.offset(step, BOARD_SIZE, BOARD_SIZE),
                    Some(to) if self.get(to) == Piece::Empty
                ) || self.jump(from, step, piece).is_some()
            })
        })
    }

    fn apply(&mut self, _move: &CheckersMove, _side: Side) -> CheckersUndo {
        let piece = self.get(_move.from);
        assert!(piece != Piece::Empty, "Trying to move from an empty square!");
        assert!(
            _move.to == _move.from || self.get(_move.to) == Piece::Empty,
            "Trying to move in busy place!"
        );
        let captured: Vec<_> = _move
            .captured
            .iter()
            .map(|square| (*square, self.get(*square)))
            .collect();
        self.set(_move.from, Piece::Empty);
        for (square, _) in &captured {
            self.set(*square, Piece::Empty);
        }
        self.set(_move.to, piece.landed_on(_move.to.row));
        CheckersUndo {
            from: _move.from,
            to: _move.to,
            piece,
            captured,
        }
    }

    fn undo(&mut self, undo: CheckersUndo) {
        self.set(undo.to, Piece::Empty);
        for (square, piece) in undo.captured {
            self.set(square, piece);
        }
        self.set(undo.from, undo.piece);
    }

    /// Material plus small bonuses for advancing men and central files.
    fn evaluate(&self) -> Score {
        let mut score = 0;
        for square in self.squares() {
            let row = square.row as Score;
            let central_col = (2..=5).contains(&square.col);
            let central_row = (2..=5).contains(&square.row);
            match self.get(square) {
                Piece::Empty => (),
                Piece::AiMan => {
                    score += MAN_VALUE + row;
                    if central_col {
                        score += 1;
                    }
                }
                Piece::AiKing => {
                    score += KING_VALUE;
                    if central_col {
                        score += 2;
                    }
                    if central_row {
                        score += 2;
                    }
                }
                Piece::PlayerMan => {
                    score -= MAN_VALUE + (BOARD_SIZE as Score - 1 - row);
                    if central_col {
                        score -= 1;
                    }
                }
                Piece::PlayerKing => {
                    score -= KING_VALUE;
                    if central_col {
                        score -= 2;
                    }
                    if central_row {
                        score -= 2;
                    }
                }
            }
        }
        score
    }

    fn terminal_score(&self, depth: u32, _maximizing: bool) -> Option<Score> {
        if !self.has_moves(Side::Ai) {
            trace!("Terminal node: AI is out of moves");
            Some(-(CHECKERS_WIN + depth as Score))
        } else if !self.has_moves(Side::Player) {
            trace!("Terminal node: player is out of moves");
            Some(CHECKERS_WIN + depth as Score)
        } else {
            None
        }
    }

    fn outcome(&self, _to_move: Side) -> Option<GameEndState> {
        if !self.has_moves(Side::Ai) {
            Some(GameEndState::Winner(Side::Player))
        } else if !self.has_moves(Side::Player) {
            Some(GameEndState::Winner(Side::Ai))
        } else {
            None
        }
    }

    fn piece_count(&self) -> usize {
        self.cells.iter().filter(|piece| **piece != Piece::Empty).count()
    }
}

/// Search depth by material left: the endgame branches less, so it can go deeper.
pub fn adaptive_depth(board: &CheckersBoard) -> u32 {
    depth_for_pieces(board.piece_count())
}
