use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::checkers::CheckersBoard;
use crate::core::definitions::{Position, Side};

/** Cell coordinate on a rectangular grid, row 0 is the top */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    /// Step by `(dr, dc)`, `None` when leaving a `rows` x `cols` grid.
    #[inline]
    pub fn offset(self, step: Step, rows: u8, cols: u8) -> Option<Square> {
        let (dr, dc) = step;
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if is_valid_coord(row, col, rows, cols) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub type Step = (i8, i8);

/** Tables of diagonal directions */
pub const KING_DIR: &[Step] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const UP_DIR: &[Step] = &[(-1, -1), (-1, 1)];
pub const DOWN_DIR: &[Step] = &[(1, -1), (1, 1)];

/** Line directions used by four-in-a-row scans */
pub const LINE_DIR: &[Step] = &[(0, 1), (1, 0), (1, 1), (1, -1)];

#[inline]
pub fn is_valid_coord(row: i8, col: i8, rows: u8, cols: u8) -> bool {
    row >= 0 && col >= 0 && (row as u8) < rows && (col as u8) < cols
}

pub struct DirectionIterator {
    position: Square,
    direction: Step,
    rows: u8,
    cols: u8,
}

impl Iterator for DirectionIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.position.offset(self.direction, self.rows, self.cols)?;
        self.position = next;
        Some(next)
    }
}

/// Walks from `position` (exclusive) in `direction` until the grid edge.
pub fn in_direction(position: Square, direction: Step, rows: u8, cols: u8) -> DirectionIterator {
    DirectionIterator {
        position,
        direction,
        rows,
        cols,
    }
}

/// Counts move paths of a checkers game `depth` plies deep, sides alternating.
pub fn perf_test(board: &CheckersBoard, side: Side, depth: usize) -> usize {
    let mut board = board.clone();
    perf_test_step(&mut board, side, depth)
}

fn perf_test_step(board: &mut CheckersBoard, side: Side, depth: usize) -> usize {
    let possible_moves = board.moves_for_side(side);
    match depth {
        0 => 1,
        1 => possible_moves.len(),
        _ => possible_moves
            .iter()
            .map(|_move| {
                let undo = board.apply(_move, side);
                let result = perf_test_step(board, side.opposite(), depth - 1);
                board.undo(undo);
                result
            })
            .sum(),
    }
}
