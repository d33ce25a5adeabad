use tictacpro_common::games::tictactoe::{CELL_COUNT, Difficulty, Mark};

use crate::config::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Start(GameMode),
    PlayAgain,
    SetDifficulty(Difficulty),
    SetComputerMark(Mark),
    Stats,
    ClearScores,
    Quit,
}

pub fn parse_menu_command(line: &str) -> Result<MenuCommand, String> {
    let trimmed = line.trim();
    let command = match trimmed.to_ascii_lowercase().as_str() {
        "1" => MenuCommand::Start(GameMode::HumanVsHuman),
        "2" => MenuCommand::Start(GameMode::HumanVsComputer),
        "3" => MenuCommand::Start(GameMode::Online),
        "p" | "play" => MenuCommand::PlayAgain,
        "e" | "easy" => MenuCommand::SetDifficulty(Difficulty::Easy),
        "m" | "medium" => MenuCommand::SetDifficulty(Difficulty::Medium),
        "h" | "hard" => MenuCommand::SetDifficulty(Difficulty::Hard),
        "x" => MenuCommand::SetComputerMark(Mark::PlayerA),
        "o" => MenuCommand::SetComputerMark(Mark::PlayerB),
        "s" | "stats" => MenuCommand::Stats,
        "c" | "clear" => MenuCommand::ClearScores,
        "q" | "quit" => MenuCommand::Quit,
        _ => return Err(format!("Unknown menu option '{}'", trimmed)),
    };
    Ok(command)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Stats,
    Quit,
}

/// Cells are typed as 1-9, matching the numbers drawn on empty squares.
pub fn parse_game_command(line: &str) -> Result<GameCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(GameCommand::Reset),
        "s" | "stats" => return Ok(GameCommand::Stats),
        "q" | "quit" => return Ok(GameCommand::Quit),
        _ => {}
    }

    let cell: usize = trimmed
        .parse()
        .map_err(|_| format!("Unknown command '{}'. Enter 1-{}, r, s or q.", trimmed, CELL_COUNT))?;
    if cell == 0 || cell > CELL_COUNT {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }
    Ok(GameCommand::Place(cell - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_to_indices() {
        assert_eq!(parse_game_command("1"), Ok(GameCommand::Place(0)));
        assert_eq!(parse_game_command(" 9\n"), Ok(GameCommand::Place(8)));
    }

    #[test]
    fn test_letters_map_to_commands() {
        assert_eq!(parse_game_command("r"), Ok(GameCommand::Reset));
        assert_eq!(parse_game_command("STATS"), Ok(GameCommand::Stats));
        assert_eq!(parse_game_command("q"), Ok(GameCommand::Quit));
    }

    #[test]
    fn test_menu_options() {
        assert_eq!(parse_menu_command("2"), Ok(MenuCommand::Start(GameMode::HumanVsComputer)));
        assert_eq!(parse_menu_command("H"), Ok(MenuCommand::SetDifficulty(Difficulty::Hard)));
        assert_eq!(parse_menu_command("x"), Ok(MenuCommand::SetComputerMark(Mark::PlayerA)));
        assert!(parse_menu_command("7").is_err());
    }

    #[test]
    fn test_out_of_range_and_garbage_rejected() {
        assert!(parse_game_command("0").is_err());
        assert!(parse_game_command("10").is_err());
        assert!(parse_game_command("x").is_err());
        assert!(parse_game_command("").is_err());
    }
}
