use chrono::{DateTime, Local};
use ringbuffer::{AllocRingBuffer, RingBuffer};
use tictacpro_common::games::tictactoe::{Board, Mark, evaluate};

pub const HISTORY_SIZE: usize = 5;
pub const HISTORY_SHOWN: usize = 3;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub board: Board,
    pub winner: Option<Mark>,
    pub moves: usize,
    pub finished_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    XMaster,
    OChampion,
    Peacekeeper,
}

impl Achievement {
    pub fn title(self) -> &'static str {
        match self {
            Achievement::XMaster => "X Master",
            Achievement::OChampion => "O Champion",
            Achievement::Peacekeeper => "Peacekeeper",
        }
    }
}

/// Session tallies and the last few finished games. Lives only as long as the process.
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
    history: AllocRingBuffer<GameRecord>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            history: AllocRingBuffer::new(HISTORY_SIZE),
        }
    }

    /// Returns false, recording nothing, while the game on `board` is still running.
    pub fn record(&mut self, board: &Board) -> bool {
        let outcome = evaluate(board);
        if !outcome.is_terminal() {
            return false;
        }

        let winner = outcome.winner();
        match winner {
            Some(Mark::PlayerA) => self.x_wins += 1,
            Some(Mark::PlayerB) => self.o_wins += 1,
            _ => self.draws += 1,
        }

        self.history.enqueue(GameRecord {
            board: *board,
            winner,
            moves: board.move_count(),
            finished_at: Local::now(),
        });
        true
    }

    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Rounded percentages of games won by X and by O.
    pub fn win_rates(&self) -> (u32, u32) {
        let total = self.total_games();
        if total == 0 {
            return (0, 0);
        }
        (percent(self.x_wins, total), percent(self.o_wins, total))
    }

    /// Share of games that produced a winner at all.
    pub fn decisive_rate(&self) -> u32 {
        percent(self.x_wins + self.o_wins, self.total_games().max(1))
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        let mut earned = Vec::new();
        if self.x_wins >= 5 {
            earned.push(Achievement::XMaster);
        }
        if self.o_wins >= 5 {
            earned.push(Achievement::OChampion);
        }
        if self.draws >= 3 {
            earned.push(Achievement::Peacekeeper);
        }
        earned
    }

    /// Newest first.
    pub fn recent_games(&self) -> Vec<&GameRecord> {
        let mut games: Vec<&GameRecord> = self.history.iter().collect();
        games.reverse();
        games
    }

    pub fn reset(&mut self) {
        self.x_wins = 0;
        self.o_wins = 0;
        self.draws = 0;
        self.history.clear();
    }
}

fn percent(part: u32, total: u32) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}
