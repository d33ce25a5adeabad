use std::io::{self, BufRead, Write};
use std::time::Duration;

use tictacpro_common::games::MoveRng;
use tictacpro_common::games::tictactoe::{
    BotInput, Difficulty, GameState, IllegalMove, Mark, calculate_move,
};
use tictacpro_common::log;

use crate::config::{GameMode, TicTacToeMatchConfig};
use crate::input::{GameCommand, parse_game_command};
use crate::render::{render_game, render_stats};
use crate::scoreboard::Scoreboard;

pub struct MatchSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    pub bot_move_delay: Duration,
}

impl MatchSettings {
    pub fn new(mode: GameMode, cfg: &TicTacToeMatchConfig) -> Self {
        Self {
            mode,
            difficulty: cfg.difficulty,
            computer_mark: cfg.computer_mark,
            bot_move_delay: Duration::from_millis(cfg.bot_move_delay_ms),
        }
    }

    fn is_computer_turn(&self, state: &GameState) -> bool {
        self.mode == GameMode::HumanVsComputer && state.current_mark() == self.computer_mark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerExit {
    BackToMenu,
    InputClosed,
}

pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &MatchSettings,
    scoreboard: &mut Scoreboard,
    rng: &mut MoveRng,
) -> io::Result<RunnerExit> {
    let mut state = GameState::new();
    let mut recorded = false;

    log!("Starting {} game (difficulty {}, seed {})", settings.mode, settings.difficulty, rng.seed());
    write!(output, "{}", render_game(&state))?;

    loop {
        if state.is_over() {
            if !recorded {
                scoreboard.record(state.board());
                recorded = true;
                log!("Game finished: {:?} after {} moves", state.outcome(), state.board().move_count());
                writeln!(output, "Enter r to play again, s for stats, q for the menu.")?;
            }
        } else if settings.is_computer_turn(&state) {
            let index = play_computer_turn(&mut state, settings, rng)?;
            writeln!(output, "Computer plays {}", index + 1)?;
            write!(output, "{}", render_game(&state))?;
            continue;
        }

        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(RunnerExit::InputClosed);
        }

        match parse_game_command(&line) {
            Err(message) => writeln!(output, "{}", message)?,
            Ok(GameCommand::Quit) => return Ok(RunnerExit::BackToMenu),
            Ok(GameCommand::Stats) => write!(output, "{}", render_stats(scoreboard))?,
            Ok(GameCommand::Reset) => {
                state.reset();
                recorded = false;
                log!("Board reset");
                write!(output, "{}", render_game(&state))?;
            }
            Ok(GameCommand::Place(index)) => match state.place_mark(index) {
                Ok(_) => write!(output, "{}", render_game(&state))?,
                Err(err) => writeln!(output, "{}", describe_illegal_move(err))?,
            },
        }
    }
}

fn play_computer_turn(
    state: &mut GameState,
    settings: &MatchSettings,
    rng: &mut MoveRng,
) -> io::Result<usize> {
    if !settings.bot_move_delay.is_zero() {
        std::thread::sleep(settings.bot_move_delay);
    }

    let index = calculate_move(settings.difficulty, BotInput::from_game_state(state), rng)
        .map_err(io::Error::other)?;
    state.place_mark(index).map_err(io::Error::other)?;

    log!("Computer ({}) played cell {}", settings.difficulty, index + 1);
    Ok(index)
}

fn describe_illegal_move(err: IllegalMove) -> String {
    match err {
        IllegalMove::CellOccupied { index } => format!("Cell {} is already taken", index + 1),
        IllegalMove::GameOver => "Game over. Enter r to play again.".to_string(),
        other => other.to_string(),
    }
}
