use super::board::Board;
use super::types::{GameOutcome, LINES, Line, Mark};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some((mark, *line))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return GameOutcome::Win { mark, line };
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
