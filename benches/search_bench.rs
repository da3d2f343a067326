use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quoridor_engine::agent::ai::{choose_action, Difficulty};
use quoridor_engine::game_repr::{has_path, shortest_path, Cell, GameState, PlayerId, Wall};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Mid-game position with a wall maze in front of both pawns
fn midgame() -> GameState {
    let walls = [
        Wall::horizontal(3, 1),
        Wall::horizontal(5, 1),
        Wall::vertical(2, 3),
        Wall::horizontal(0, 5),
        Wall::horizontal(2, 5),
        Wall::vertical(6, 6),
    ];
    GameState::custom(Cell::new(2, 4), Cell::new(6, 4), PlayerId::One)
        .and_then(|state| state.with_walls(&walls))
        .unwrap()
}

fn bench_shortest_path(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("shortest path midgame", |b| {
        b.iter(|| black_box(shortest_path(Cell::new(2, 4), 8, state.walls())))
    });
}

fn bench_has_path(c: &mut Criterion) {
    let state = midgame();
    c.bench_function("has path midgame", |b| {
        b.iter(|| black_box(has_path(Cell::new(6, 4), 0, state.walls())))
    });
}

fn bench_choose_action(c: &mut Criterion) {
    let state = midgame();
    for &difficulty in Difficulty::all() {
        c.bench_function(&format!("choose action {}", difficulty), |b| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(choose_action(&state, difficulty, &mut rng)))
        });
    }
}

criterion_group!(benches, bench_shortest_path, bench_has_path, bench_choose_action);
criterion_main!(benches);
