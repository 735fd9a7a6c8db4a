use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arcade_ai::{
    core::{definitions::SCORE_INFINITY, utils::perf_test},
    minimax, minimax_exhaustive, CheckersBoard, ConnectFourBoard, ConnectFourMatch, GameState,
    MinMaxBot, Position, Side, TieBreak,
};


fn random_game(mut game: ConnectFourMatch, max_steps: usize) -> ConnectFourMatch {
    for _ in 0..max_steps {
        if matches!(game.make_random_move(), GameState::Finished(_)) {
            break;
        }
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    let checkers = CheckersBoard::new();
    let connect_four = ConnectFourBoard::new();

    c.bench_function("checkers move generation", |b| b.iter(|| black_box(&checkers).moves_for_side(Side::Player)));
    c.bench_function("checkers perft 4", |b| b.iter(|| perf_test(black_box(&checkers), Side::Player, 4)));
    c.bench_function("checkers evaluate", |b| b.iter(|| black_box(&checkers).evaluate()));

    c.bench_function("checkers alpha-beta 5", |b| b.iter(|| {
        minimax(black_box(&checkers), 5, -SCORE_INFINITY, SCORE_INFINITY, true)
    }));
    c.bench_function("checkers full minimax 5", |b| b.iter(|| {
        minimax_exhaustive(black_box(&checkers), 5, true)
    }));

    c.bench_function("connect four alpha-beta 6", |b| b.iter(|| {
        minimax(black_box(&connect_four), 6, -SCORE_INFINITY, SCORE_INFINITY, true)
    }));
    c.bench_function("connect four full minimax 6", |b| b.iter(|| {
        minimax_exhaustive(black_box(&connect_four), 6, true)
    }));
    c.bench_function("connect four best move hard", |b| {
        let bot = MinMaxBot::new(7).with_tie_break(TieBreak::Ordered);
        b.iter(|| bot.search(black_box(&connect_four)))
    });

    c.bench_function("connect four random game", |b| b.iter(|| {
        let game: ConnectFourMatch = Default::default();
        random_game(game, 42)
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
