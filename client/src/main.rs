mod config;
mod input;
mod menu;
mod offline;
mod online;
mod render;
mod scoreboard;

use clap::{Parser, ValueEnum};
use tictacpro_common::config::{ConfigError, Validate};
use tictacpro_common::games::MoveRng;
use tictacpro_common::games::tictactoe::{Difficulty, Mark};
use tictacpro_common::{log, logger};

use config::{Config, GameMode, get_config_manager};
use scoreboard::Scoreboard;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::PlayerA,
            MarkArg::O => Mark::PlayerB,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictacpro", about = "Terminal tic-tac-toe against a friend or the computer")]
struct Args {
    /// Mode preselected in the menu.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Which mark the computer plays; X always moves first.
    #[arg(long, value_enum)]
    computer: Option<MarkArg>,

    /// Pause before the computer's move, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    quiet: bool,

    /// Don't write menu choices back to the config file.
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, !args.quiet);

    let config_manager = get_config_manager();
    let file_config = config_manager.get_config()?;
    let mut config = apply_overrides(&args, file_config.clone());
    config.validate().map_err(ConfigError::Invalid)?;

    let mut rng = match args.seed.or(config.rng_seed) {
        Some(seed) => MoveRng::new(seed),
        None => MoveRng::from_random(),
    };
    log!("TicTacPro started (seed {})", rng.seed());

    let mut scoreboard = Scoreboard::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let choices = menu::run_menu(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut config,
        &mut scoreboard,
        &mut rng,
    )?;

    if !args.no_save {
        config_manager.set_config(&config_to_save(file_config, &choices))?;
    }
    log!(
        "Session over: {} games, X {} / O {} / draws {}",
        scoreboard.total_games(),
        scoreboard.x_wins(),
        scoreboard.o_wins(),
        scoreboard.draws()
    );

    Ok(())
}

/// Session settings: the file config with this run's flags on top.
fn apply_overrides(args: &Args, mut config: Config) -> Config {
    if let Some(mode) = args.mode {
        config.last_mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty.into();
    }
    if let Some(computer) = args.computer {
        config.tictactoe.computer_mark = computer.into();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.tictactoe.bot_move_delay_ms = delay_ms;
    }
    config
}

/// Flags only last one run, so the file keeps its values unless the menu changed them.
fn config_to_save(file_config: Config, choices: &menu::MenuChoices) -> Config {
    let mut config = file_config;
    choices.apply_to(&mut config);
    config
}
