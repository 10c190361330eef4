//! Criterion micro-benchmarks for board operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use taquin::{scramble, Board};
use taquin_bench::shuffled_tiles;

/// Benchmark: construct (validate and score) a 100×100 board, 10K cells.
fn bench_score_100x100(c: &mut Criterion) {
    let tiles = shuffled_tiles(100, 42);

    c.bench_function("score_100x100", |b| {
        b.iter(|| {
            let board = Board::from_row_major(100, black_box(&tiles)).unwrap();
            black_box(&board);
        });
    });
}

/// Benchmark: enumerate neighbours of 1000 scrambled 15-puzzle boards.
fn bench_neighbours_4x4_1k(c: &mut Criterion) {
    let boards: Vec<Board> = (0..1000).map(|seed| scramble(4, 60, seed).unwrap()).collect();

    c.bench_function("neighbours_4x4_1k", |b| {
        b.iter(|| {
            for board in &boards {
                let n = board.neighbours();
                black_box(&n);
            }
        });
    });
}

/// Benchmark: the O(cells²) inversion count behind the solvability test.
fn bench_solvability_16x16(c: &mut Criterion) {
    let board = Board::from_row_major(16, &shuffled_tiles(16, 42)).unwrap();

    c.bench_function("solvability_16x16", |b| {
        b.iter(|| black_box(board.is_solvable()));
    });
}

/// Benchmark: a 1000-slide scramble walk on the 15-puzzle.
fn bench_scramble_4x4_1k_moves(c: &mut Criterion) {
    c.bench_function("scramble_4x4_1k_moves", |b| {
        b.iter(|| {
            let board = scramble(4, 1000, black_box(7)).unwrap();
            black_box(&board);
        });
    });
}

criterion_group!(
    benches,
    bench_score_100x100,
    bench_neighbours_4x4_1k,
    bench_solvability_16x16,
    bench_scramble_4x4_1k_moves
);
criterion_main!(benches);
