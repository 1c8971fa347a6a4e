use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use parlor_chess::game_state::board::Board;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::move_generation::move_generator::{generate_legal_moves, has_legal_moves};
use parlor_chess::move_generation::perft::perft;

const STARTPOS_EXPECTED_NODES: [u64; 3] = [20, 400, 8902];

fn bench_perft(c: &mut Criterion) {
    let board = Board::starting_position();

    // Pin the generator down before timing it.
    for (depth, expected) in STARTPOS_EXPECTED_NODES.iter().enumerate() {
        let depth = depth as u32 + 1;
        assert_eq!(
            perft(&board, Color::White, depth),
            *expected,
            "perft({depth}) from the starting position"
        );
    }

    let mut group = c.benchmark_group("perft_startpos");
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(10);

    for (depth, expected) in STARTPOS_EXPECTED_NODES.iter().enumerate() {
        let depth = depth as u32 + 1;
        group.throughput(Throughput::Elements(*expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft(black_box(&board), Color::White, depth));
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::starting_position();

    c.bench_function("legal_moves_all_white_startpos", |b| {
        b.iter(|| {
            let total: usize = board
                .occupied_squares()
                .filter(|(_, piece)| piece.color == Color::White)
                .map(|(from, _)| generate_legal_moves(black_box(&board), from, Color::White).len())
                .sum();
            total
        });
    });

    c.bench_function("has_legal_moves_startpos", |b| {
        b.iter(|| has_legal_moves(black_box(&board), Color::White));
    });
}

criterion_group!(benches, bench_perft, bench_legal_moves);
criterion_main!(benches);
