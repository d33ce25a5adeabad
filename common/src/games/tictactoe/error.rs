use super::types::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    GameOver,
    EmptyMark,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfRange { index } => {
                write!(f, "Cell {} is out of range (0..{})", index, CELL_COUNT)
            }
            IllegalMove::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            IllegalMove::GameOver => write!(f, "Game is already over"),
            IllegalMove::EmptyMark => write!(f, "Empty is not a playable mark"),
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    NoLegalMove,
    NotAPlayerMark,
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::NoLegalMove => write!(f, "No legal move: board is full or the game is over"),
            BotError::NotAPlayerMark => write!(f, "Computer must play X or O, not Empty"),
        }
    }
}

impl std::error::Error for BotError {}
