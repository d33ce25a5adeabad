use std::io::{self, BufRead, Write};

use tictacpro_common::games::MoveRng;
use tictacpro_common::games::tictactoe::{Difficulty, Mark};
use tictacpro_common::log;

use crate::config::{Config, GameMode};
use crate::input::{MenuCommand, parse_menu_command};
use crate::offline::{MatchSettings, RunnerExit, run_tictactoe_game};
use crate::online::run_online_game;
use crate::render::render_stats;
use crate::scoreboard::Scoreboard;

/// Settings picked in the menu during this session. Only these are written back to the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuChoices {
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub computer_mark: Option<Mark>,
}

impl MenuChoices {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.last_mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.tictactoe.difficulty = difficulty;
        }
        if let Some(computer_mark) = self.computer_mark {
            config.tictactoe.computer_mark = computer_mark;
        }
    }
}

fn render_menu(config: &Config) -> String {
    format!(
        "\n== TicTacPro ==\n\
         Mode: {} | Difficulty: {} | Computer plays: {}\n\
         1) Player vs Player  2) vs Computer  3) Online  p) play last mode\n\
         e/m/h) difficulty  x/o) computer's mark  s) stats  c) clear scores  q) quit\n",
        config.last_mode, config.tictactoe.difficulty, config.tictactoe.computer_mark
    )
}

/// Runs until the user quits or input ends. Choices update `config` for the rest of the session and are returned.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &mut Config,
    scoreboard: &mut Scoreboard,
    rng: &mut MoveRng,
) -> io::Result<MenuChoices> {
    let mut choices = MenuChoices::default();
    loop {
        write!(output, "{}> ", render_menu(config))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(choices);
        }

        let command = match parse_menu_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            MenuCommand::Start(mode) => {
                config.last_mode = mode;
                choices.mode = Some(mode);
                if start_game(input, output, config, scoreboard, rng)? == RunnerExit::InputClosed {
                    return Ok(choices);
                }
            }
            MenuCommand::PlayAgain => {
                if start_game(input, output, config, scoreboard, rng)? == RunnerExit::InputClosed {
                    return Ok(choices);
                }
            }
            MenuCommand::SetDifficulty(difficulty) => {
                config.tictactoe.difficulty = difficulty;
                choices.difficulty = Some(difficulty);
                log!("Difficulty set to {}", difficulty);
            }
            MenuCommand::SetComputerMark(mark) => {
                config.tictactoe.computer_mark = mark;
                choices.computer_mark = Some(mark);
                log!("Computer plays {}", mark);
            }
            MenuCommand::Stats => write!(output, "{}", render_stats(scoreboard))?,
            MenuCommand::ClearScores => {
                scoreboard.reset();
                writeln!(output, "Scores cleared.")?;
            }
            MenuCommand::Quit => return Ok(choices),
        }
    }
}

fn start_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
    scoreboard: &mut Scoreboard,
    rng: &mut MoveRng,
) -> io::Result<RunnerExit> {
    match config.last_mode {
        GameMode::Online => {
            run_online_game(output)?;
            Ok(RunnerExit::BackToMenu)
        }
        mode => {
            let settings = MatchSettings::new(mode, &config.tictactoe);
            run_tictactoe_game(input, output, &settings, scoreboard, rng)
        }
    }
}
