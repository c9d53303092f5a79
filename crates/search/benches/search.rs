use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fruit_core::Board;
use fruit_engine::{ChildOrdering, OrderingPolicy};
use fruit_search::{minimax_value, SearchEngine};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_board(size: usize, kinds: u8, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rows: Vec<String> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| (b'0' + rng.gen_range(0..kinds)) as char)
                .collect()
        })
        .collect();
    Board::from_rows(&rows).expect("generated board is valid")
}

fn bench_alphabeta(c: &mut Criterion) {
    let board = random_board(8, 4, 21);

    for (policy, name) in [
        (OrderingPolicy::default(), "adaptive"),
        (OrderingPolicy::always(ChildOrdering::Sorted), "sorted"),
        (OrderingPolicy::always(ChildOrdering::Streamed), "streamed"),
    ] {
        let engine = SearchEngine::new(3)
            .expect("non-zero depth")
            .with_ordering(policy);
        c.bench_function(&format!("alphabeta_{name}_8x8_d3"), |b| {
            b.iter(|| engine.decide(black_box(&board)))
        });
    }

    let parallel = SearchEngine::new(3)
        .expect("non-zero depth")
        .with_parallel(true);
    c.bench_function("alphabeta_parallel_8x8_d3", |b| {
        b.iter(|| parallel.decide(black_box(&board)))
    });
}

fn bench_minimax(c: &mut Criterion) {
    let board = random_board(5, 3, 4);

    c.bench_function("minimax_5x5_d3", |b| {
        b.iter(|| minimax_value(black_box(&board), 3))
    });
}

criterion_group!(benches, bench_alphabeta, bench_minimax);
criterion_main!(benches);
