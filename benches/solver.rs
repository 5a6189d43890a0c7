use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{Grid, MazeState, PlacementBounds, SimpleRng};
use tui_maze::engine::Backtracker;

const SAMPLE: &str = include_str!("../mazes/labirinto.csv");

fn placed(seed: u32) -> MazeState {
    let mut maze = MazeState::load(SAMPLE).unwrap();
    let (rows, cols) = maze.dimensions();
    maze.place_player_and_goal(PlacementBounds::interior(rows, cols), &mut SimpleRng::new(seed))
        .unwrap();
    maze
}

fn bench_solve(c: &mut Criterion) {
    let base = placed(2024);

    c.bench_function("backtrack_41x41", |b| {
        b.iter(|| {
            let mut maze = base.clone();
            let mut solver = Backtracker::new(&maze);
            black_box(solver.run(&mut maze));
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_41x41", |b| {
        b.iter(|| {
            black_box(Grid::parse(black_box(SAMPLE)).unwrap());
        })
    });
}

fn bench_placement(c: &mut Criterion) {
    let base = MazeState::load(SAMPLE).unwrap();
    let bounds = PlacementBounds::interior(41, 41);
    let mut rng = SimpleRng::new(1);

    c.bench_function("place_player_and_goal", |b| {
        b.iter(|| {
            let mut maze = base.clone();
            black_box(maze.place_player_and_goal(bounds, &mut rng).unwrap());
        })
    });
}

criterion_group!(benches, bench_solve, bench_parse, bench_placement);
criterion_main!(benches);
