use std::fmt;

use super::error::IllegalMove;
use super::types::{BOARD_SIDE, CELL_COUNT, Mark};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_player()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_player())
    }

    /// Returns the board with `index` set to `mark`; `self` is left untouched.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, IllegalMove> {
        if mark == Mark::Empty {
            return Err(IllegalMove::EmptyMark);
        }
        if index >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange { index });
        }
        if evaluate(self).is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if self.cells[index] != Mark::Empty {
            return Err(IllegalMove::CellOccupied { index });
        }

        let mut next = *self;
        next.cells[index] = mark;
        Ok(next)
    }

    // Unchecked write used by the search, which only visits empty cells of live boards.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cells: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, mark)| match mark {
                    Mark::Empty => format!(" {} ", row * BOARD_SIDE + col + 1),
                    _ => format!(" {} ", mark),
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, IllegalMove> {
    board.apply_move(index, mark)
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
pub(crate) fn board_from(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    let marks: Vec<Mark> = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' | 'A' => Mark::PlayerA,
            'O' | 'B' => Mark::PlayerB,
            _ => Mark::Empty,
        })
        .collect();
    assert_eq!(marks.len(), CELL_COUNT, "layout must describe 9 cells");
    cells.copy_from_slice(&marks);
    Board::from_cells(cells)
}
