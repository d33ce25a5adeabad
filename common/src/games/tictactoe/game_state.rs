use super::board::Board;
use super::error::IllegalMove;
use super::types::{GameOutcome, Mark, next_mark};
use super::win_detector::evaluate;

/// The live game a front-end renders: the board, whose turn it is and the last cell played.
/// The outcome is always recomputed from the board.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::PlayerA,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameOutcome, IllegalMove> {
        self.board = self.board.apply_move(index, self.current_mark)?;
        self.last_move = Some(index);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.current_mark = next_mark(self.current_mark).ok_or(IllegalMove::EmptyMark)?;
        }
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
