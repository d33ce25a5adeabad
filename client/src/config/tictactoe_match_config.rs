use serde::{Deserialize, Serialize};
use tictacpro_common::config::Validate;
use tictacpro_common::games::tictactoe::{Difficulty, Mark};

pub const MAX_BOT_MOVE_DELAY_MS: u64 = 5_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeMatchConfig {
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    pub bot_move_delay_ms: u64,
}

impl Validate for TicTacToeMatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("computer_mark must be PlayerA or PlayerB".to_string());
        }
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeMatchConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            computer_mark: Mark::PlayerB,
            bot_move_delay_ms: 500,
        }
    }
}
