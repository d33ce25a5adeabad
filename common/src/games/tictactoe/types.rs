use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::PlayerA => Some(Mark::PlayerB),
            Mark::PlayerB => Some(Mark::PlayerA),
            Mark::Empty => None,
        }
    }

    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whose turn follows `mark`. `Empty` never has a turn, so it maps to `None`.
pub fn next_mark(mark: Mark) -> Option<Mark> {
    mark.opponent()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([usize; 3]);

impl Line {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}

/// Rows, then columns, then diagonals. `evaluate` reports the first match in this order.
pub static LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win { mark: Mark, line: Line },
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_mark_alternates() {
        assert_eq!(next_mark(Mark::PlayerA), Some(Mark::PlayerB));
        assert_eq!(next_mark(Mark::PlayerB), Some(Mark::PlayerA));
        assert_eq!(next_mark(Mark::Empty), None);
    }

    #[test]
    fn test_lines_are_rows_then_columns_then_diagonals() {
        let cells: Vec<[usize; 3]> = LINES.iter().map(|line| line.cells()).collect();
        assert_eq!(
            cells,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for cell in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.cells().contains(&cell)));
        }
        assert_eq!(LINES.iter().filter(|line| line.cells().contains(&CENTER)).count(), 4);
    }
}
