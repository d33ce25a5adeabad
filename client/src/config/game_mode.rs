use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer,
    /// Placeholder: there is no network play behind it.
    Online,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::HumanVsHuman => "Player vs Player",
            GameMode::HumanVsComputer => "vs Computer",
            GameMode::Online => "Online",
        };
        write!(f, "{}", name)
    }
}
