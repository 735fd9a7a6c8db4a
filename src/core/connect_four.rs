use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::core::definitions::{GameEndState, Position, Score, Side};
use crate::core::utils::{in_direction, Square, LINE_DIR};

pub const ROWS: u8 = 6;
pub const COLS: u8 = 7;

/** Score of a completed four-in-a-row, biased by the remaining depth */
pub const CONNECT_FOUR_WIN: Score = 1_000;

const CENTER_COL: u8 = 3;
const CENTER_WEIGHT: Score = 3;

/// Column ordering: center-first, it cuts more branches early.
pub const MOVE_ORDER: [u8; COLS as usize] = [3, 2, 4, 1, 5, 0, 6];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    #[default]
    Empty,
    Player,
    Cpu,
}

impl Disc {
    pub fn side(self) -> Option<Side> {
        match self {
            Disc::Player => Some(Side::Player),
            Disc::Cpu => Some(Side::Ai),
            Disc::Empty => None,
        }
    }

    pub fn of(side: Side) -> Disc {
        match side {
            Side::Player => Disc::Player,
            Side::Ai => Disc::Cpu,
        }
    }

    pub fn swapped(self) -> Disc {
        match self {
            Disc::Player => Disc::Cpu,
            Disc::Cpu => Disc::Player,
            Disc::Empty => Disc::Empty,
        }
    }
}

/** The landing row follows from gravity */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourMove {
    pub column: u8,
}

impl Display for ConnectFourMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConnectFourUndo {
    square: Square,
}

/** 6 rows x 7 columns, row 0 is the top */
#[serde_as]
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourBoard {
    #[serde_as(as = "[_; 42]")]
    cells: [Disc; 42],
}

#[inline]
fn index(square: Square) -> usize {
    square.row as usize * COLS as usize + square.col as usize
}

impl ConnectFourBoard {
    pub fn new() -> ConnectFourBoard {
        ConnectFourBoard {
            cells: [Disc::Empty; 42],
        }
    }

    /// Parses six rows of `.`, `x` (player) and `o` (CPU), top row first.
    pub fn from_rows(rows: &[&str]) -> Option<ConnectFourBoard> {
        if rows.len() != ROWS as usize {
            return None;
        }
        let mut board = ConnectFourBoard::new();
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != COLS as usize {
                return None;
            }
            for (col, symbol) in line.chars().enumerate() {
                let disc = match symbol {
                    '.' | ' ' | '_' => Disc::Empty,
                    'x' | 'X' => Disc::Player,
                    'o' | 'O' => Disc::Cpu,
                    _ => return None,
                };
                board.set(Square::new(row as u8, col as u8), disc);
            }
        }
        Some(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Disc {
        self.cells[index(square)]
    }

    #[inline]
    pub fn set(&mut self, square: Square, disc: Disc) {
        self.cells[index(square)] = disc;
    }

    #[inline]
    pub fn can_drop(&self, column: u8) -> bool {
        column < COLS && self.get(Square::new(0, column)) == Disc::Empty
    }

    /// Lowest empty row of `column`.
    pub fn drop_row(&self, column: u8) -> Option<u8> {
        if column >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|row| self.get(Square::new(*row, column)) == Disc::Empty)
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| !self.can_drop(column))
    }

    /// Cells of the first four-in-a-row of `disc`, scanning from the top-left.
    pub fn winning_line(&self, disc: Disc) -> Option<[Square; 4]> {
        if disc == Disc::Empty {
            return None;
        }
        for row in 0..ROWS {
            for col in 0..COLS {
                let start = Square::new(row, col);
                if self.get(start) != disc {
                    continue;
                }
                for &direction in LINE_DIR {
                    let mut line = [start; 4];
                    let mut length = 1;
                    for square in in_direction(start, direction, ROWS, COLS).take(3) {
                        if self.get(square) != disc {
                            break;
                        }
                        line[length] = square;
                        length += 1;
                    }
                    if length == 4 {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    #[inline]
    pub fn has_four(&self, disc: Disc) -> bool {
        self.winning_line(disc).is_some()
    }

    /// Same board with the two colours exchanged.
    pub fn mirrored(&self) -> ConnectFourBoard {
        let mut board = self.clone();
        for disc in board.cells.iter_mut() {
            *disc = disc.swapped();
        }
        board
    }
}

impl Default for ConnectFourBoard {
    fn default() -> Self {
        ConnectFourBoard::new()
    }
}

impl Display for ConnectFourBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let symbol = match self.get(Square::new(row, col)) {
                    Disc::Empty => '.',
                    Disc::Player => 'x',
                    Disc::Cpu => 'o',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for ConnectFourBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConnectFourBoard\n{}", self)
    }
}

impl Position for ConnectFourBoard {
    type Move = ConnectFourMove;
    type Undo = ConnectFourUndo;

    /// Open columns, center-first. Both sides share the same list.
    fn moves_for_side(&self, _side: Side) -> Vec<ConnectFourMove> {
        MOVE_ORDER
            .iter()
            .filter(|column| self.can_drop(**column))
            .map(|column| ConnectFourMove { column: *column })
            .collect()
    }

    fn has_moves(&self, _side: Side) -> bool {
        !self.is_full()
    }

    fn apply(&mut self, _move: &ConnectFourMove, side: Side) -> ConnectFourUndo {
        let Some(row) = self.drop_row(_move.column) else {
            panic!("Trying to drop into a full column {}!", _move.column);
        };
        let square = Square::new(row, _move.column);
        self.set(square, Disc::of(side));
        ConnectFourUndo { square }
    }

    fn undo(&mut self, undo: ConnectFourUndo) {
        self.set(undo.square, Disc::Empty);
    }

    fn evaluate(&self) -> Score {
        if self.has_four(Disc::Cpu) {
            return CONNECT_FOUR_WIN;
        }
        if self.has_four(Disc::Player) {
            return -CONNECT_FOUR_WIN;
        }
        (0..ROWS)
            .map(|row| match self.get(Square::new(row, CENTER_COL)) {
                Disc::Cpu => CENTER_WEIGHT,
                Disc::Player => -CENTER_WEIGHT,
                Disc::Empty => 0,
            })
            .sum()
    }

    /// A full board without a line is not scored here, the draw goes
    /// through `evaluate`.
    fn terminal_score(&self, depth: u32, _maximizing: bool) -> Option<Score> {
        if self.has_four(Disc::Cpu) {
            Some(CONNECT_FOUR_WIN + depth as Score)
        } else if self.has_four(Disc::Player) {
            Some(-(CONNECT_FOUR_WIN + depth as Score))
        } else {
            None
        }
    }

    fn outcome(&self, _to_move: Side) -> Option<GameEndState> {
        if self.has_four(Disc::Cpu) {
            Some(GameEndState::Winner(Side::Ai))
        } else if self.has_four(Disc::Player) {
            Some(GameEndState::Winner(Side::Player))
        } else if self.is_full() {
            Some(GameEndState::Draw)
        } else {
            None
        }
    }

    fn piece_count(&self) -> usize {
        self.cells.iter().filter(|disc| **disc != Disc::Empty).count()
    }
}
