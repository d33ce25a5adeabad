use crate::games::MoveRng;
use super::board::{Board, get_available_moves};
use super::error::BotError;
use super::game_state::GameState;
use super::types::{CENTER, Difficulty, GameOutcome, Mark};
use super::win_detector::{check_win, evaluate};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub computer_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, computer_mark: Mark) -> Self {
        Self { board, computer_mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            computer_mark: state.current_mark(),
        }
    }
}

pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    rng: &mut MoveRng,
) -> Result<usize, BotError> {
    calculate_move(difficulty, BotInput::new(*board, computer_mark), rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut MoveRng,
) -> Result<usize, BotError> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => calculate_heuristic_move(&input, rng),
        Difficulty::Hard => calculate_minimax_move(&input),
    }
}

struct Turn {
    bot_mark: Mark,
    opponent_mark: Mark,
    available_moves: Vec<usize>,
}

fn prepare_turn(input: &BotInput) -> Result<Turn, BotError> {
    let opponent_mark = input
        .computer_mark
        .opponent()
        .ok_or(BotError::NotAPlayerMark)?;

    if evaluate(&input.board).is_terminal() {
        return Err(BotError::NoLegalMove);
    }

    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return Err(BotError::NoLegalMove);
    }

    Ok(Turn {
        bot_mark: input.computer_mark,
        opponent_mark,
        available_moves,
    })
}

fn calculate_random_move(input: &BotInput, rng: &mut MoveRng) -> Result<usize, BotError> {
    let turn = prepare_turn(input)?;
    rng.choose(&turn.available_moves).ok_or(BotError::NoLegalMove)
}

/// Win, then block, then center, then random. Each step returns as soon as it has a candidate.
/// Only one move ahead is examined, so a double threat by the opponent goes unnoticed.
fn calculate_heuristic_move(input: &BotInput, rng: &mut MoveRng) -> Result<usize, BotError> {
    let turn = prepare_turn(input)?;

    if let Some(index) = find_winning_move(&input.board, turn.bot_mark, &turn.available_moves) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(&input.board, turn.opponent_mark, &turn.available_moves)
    {
        return Ok(index);
    }

    if input.board.is_empty_at(CENTER) {
        return Ok(CENTER);
    }

    rng.choose(&turn.available_moves).ok_or(BotError::NoLegalMove)
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, BotError> {
    let turn = prepare_turn(input)?;
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &index in &turn.available_moves {
        board.set(index, turn.bot_mark);
        // Alpha starts at the best score so far: a later move has to beat it strictly,
        // so pruned subtrees can never displace an earlier, lower index.
        let score = minimax(
            &mut board,
            false,
            turn.bot_mark,
            turn.opponent_mark,
            best_score,
            i32::MAX,
        );
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
        if best_score == WIN_SCORE {
            break;
        }
    }

    best_move.ok_or(BotError::NoLegalMove)
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves.iter().copied().find(|&index| {
        let mut probe = *board;
        probe.set(index, mark);
        check_win(&probe) == Some(mark)
    })
}

fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        GameOutcome::Win { mark, .. } => {
            return if mark == bot_mark { WIN_SCORE } else { LOSS_SCORE };
        }
        GameOutcome::Draw => return DRAW_SCORE,
        GameOutcome::InProgress => {}
    }

    // Every ply fills one empty cell, so the recursion is bounded by the empty count.
    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, false, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, true, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
