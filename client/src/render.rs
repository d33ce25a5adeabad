use std::fmt::Write;

use tictacpro_common::games::tictactoe::{BOARD_SIDE, Board, GameOutcome, GameState};

use crate::scoreboard::{HISTORY_SHOWN, Scoreboard};

pub fn render_status(state: &GameState) -> String {
    match state.outcome() {
        GameOutcome::InProgress => format!("{} to move", state.current_mark()),
        GameOutcome::Win { mark, line } => {
            let [a, b, c] = line.cells();
            format!("{} wins! Line {}-{}-{}", mark, a + 1, b + 1, c + 1)
        }
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

pub fn render_game(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = write!(out, "{}", state.board());
    let _ = writeln!(out, "{}", render_status(state));
    out
}

pub fn render_stats(scoreboard: &Scoreboard) -> String {
    let (x_rate, o_rate) = scoreboard.win_rates();
    let mut out = String::new();

    let _ = writeln!(out, "== Statistics ==");
    let _ = writeln!(out, "X wins: {} ({}% win rate)", scoreboard.x_wins(), x_rate);
    let _ = writeln!(out, "Draws:  {}", scoreboard.draws());
    let _ = writeln!(out, "O wins: {} ({}% win rate)", scoreboard.o_wins(), o_rate);
    let _ = writeln!(
        out,
        "Total games: {}, decided: {}%",
        scoreboard.total_games(),
        scoreboard.decisive_rate()
    );

    let recent = scoreboard.recent_games();
    if !recent.is_empty() {
        let _ = writeln!(out, "Recent games:");
        for game in recent.iter().take(HISTORY_SHOWN) {
            let result = match game.winner {
                Some(mark) => format!("{} won", mark),
                None => "Draw".to_string(),
            };
            let _ = writeln!(
                out,
                "  {} - {} moves - {} [{}]",
                game.finished_at.format("%H:%M:%S"),
                game.moves,
                result,
                compact_board(&game.board)
            );
        }
    }

    let achievements = scoreboard.achievements();
    if !achievements.is_empty() {
        let titles: Vec<&str> = achievements.iter().map(|a| a.title()).collect();
        let _ = writeln!(out, "Achievements: {}", titles.join(", "));
    }
    out
}

/// One row per group, e.g. `XXX OO. ...`.
fn compact_board(board: &Board) -> String {
    board
        .cells()
        .chunks(BOARD_SIDE)
        .map(|row| row.iter().map(|mark| mark.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_each_outcome() {
        let mut state = GameState::new();
        assert_eq!(render_status(&state), "X to move");

        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(render_status(&state), "X wins! Line 1-2-3");
    }

    #[test]
    fn test_stats_lists_recent_games_and_achievements() {
        let mut scoreboard = Scoreboard::new();
        let mut state = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        for _ in 0..5 {
            scoreboard.record(state.board());
        }

        let stats = render_stats(&scoreboard);
        assert!(stats.contains("X wins: 5 (100% win rate)"));
        assert_eq!(stats.matches("5 moves - X won [XXX OO. ...]").count(), HISTORY_SHOWN);
        assert!(stats.contains("Achievements: X Master"));
    }
}
