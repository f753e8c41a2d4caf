use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_snake::core::{FoodSpawner, GameSnapshot, GameState, Snake};
use tui_snake::types::Phase;

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_step", |b| {
        b.iter(|| {
            if state.phase() == Phase::GameOver {
                state.restart();
            }
            black_box(state.step());
        })
    });
}

fn bench_food_spawn(c: &mut Criterion) {
    let snake = Snake::spawn();
    let mut spawner = FoodSpawner::new(12345);

    c.bench_function("food_spawn", |b| {
        b.iter(|| black_box(spawner.spawn(&snake)))
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(benches, bench_step, bench_food_spawn, bench_snapshot_into);
criterion_main!(benches);
