mod config;
mod game_mode;
mod tictactoe_match_config;

pub use config::{Config, get_config_manager};
pub use game_mode::GameMode;
pub use tictactoe_match_config::TicTacToeMatchConfig;
