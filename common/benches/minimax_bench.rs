use criterion::{criterion_group, criterion_main, Criterion};
use tictacpro_common::games::MoveRng;
use tictacpro_common::games::tictactoe::{
    apply_move, evaluate, select_move, Board, Difficulty, Mark,
};

fn bench_hard_single_move_empty_board() {
    let mut rng = MoveRng::new(0);
    let _ = select_move(&Board::new(), Difficulty::Hard, Mark::PlayerA, &mut rng);
}

fn bench_hard_reply_to_corner_opening() {
    let board = match apply_move(&Board::new(), 0, Mark::PlayerA) {
        Ok(board) => board,
        Err(_) => return,
    };
    let mut rng = MoveRng::new(0);
    let _ = select_move(&board, Difficulty::Hard, Mark::PlayerB, &mut rng);
}

fn bench_hard_self_play_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::PlayerA;
    let mut rng = MoveRng::new(0);

    while !evaluate(&board).is_terminal() {
        let Ok(index) = select_move(&board, Difficulty::Hard, current_mark, &mut rng) else {
            break;
        };
        let Ok(next) = apply_move(&board, index, current_mark) else {
            break;
        };
        board = next;
        let Some(next_mark) = current_mark.opponent() else {
            break;
        };
        current_mark = next_mark;
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_hard_single_move_empty_board)
    });

    group.bench_function("reply_to_corner", |b| {
        b.iter(bench_hard_reply_to_corner_opening)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_hard_self_play_full_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
