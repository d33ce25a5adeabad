mod tictactoe_runner;

pub use tictactoe_runner::{MatchSettings, RunnerExit, run_tictactoe_game};
