//! Balancer benchmarks.
//!
//! Run with: `cargo bench -p tb_core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tb_core::{BalancerConfig, Player, Position, TeamBalancer};

fn roster(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| {
            let position = Position::SPINE[i % 4];
            let stars = (i * 7 % 5) as u8 + 1;
            Player::create(format!("Player {}", i), position, stars).unwrap()
        })
        .collect()
}

fn bench_roster_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance_roster_size");
    let balancer = TeamBalancer::default();

    for size in [10, 22, 40, 100] {
        let players = roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("optimized", size), &players, |b, players| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(balancer.balance_seeded(black_box(players), seed))
            });
        });
    }

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance_mode");
    let players = roster(22);

    let optimized = TeamBalancer::default();
    let alternating = TeamBalancer::new(BalancerConfig::alternating()).unwrap();

    group.bench_function("optimized_22", |b| {
        b.iter(|| black_box(optimized.balance_seeded(black_box(&players), 42)))
    });
    group.bench_function("alternating_22", |b| {
        b.iter(|| black_box(alternating.balance_seeded(black_box(&players), 42)))
    });

    group.finish();
}

criterion_group!(benches, bench_roster_sizes, bench_modes);
criterion_main!(benches);
