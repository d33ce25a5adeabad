mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, apply_move, get_available_moves};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, select_move};
pub use error::{BotError, IllegalMove};
pub use game_state::GameState;
pub use types::{
    BOARD_SIDE, CELL_COUNT, CENTER, Difficulty, GameOutcome, LINES, Line, Mark, next_mark,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
