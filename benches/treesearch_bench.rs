//! Criterion benchmarks for u-treesearch strategies.
//!
//! Uses a 4-connected grid with random walls so that the measured cost is
//! frontier management and cycle filtering rather than domain logic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_treesearch::tree::{Domain, Problem, Strategy, TreeConfig, TreeRunner};

// ===========================================================================
// Grid with walls: move N/S/E/W, unit cost, Manhattan heuristic
// ===========================================================================

struct Grid {
    size: i32,
    walls: Vec<bool>,
}

impl Grid {
    fn random(size: i32, density: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut walls: Vec<bool> = (0..size * size).map(|_| rng.random_bool(density)).collect();
        // Keep the top row and right column open so the goal stays reachable.
        for i in 0..size {
            walls[i as usize] = false;
            walls[(i * size + size - 1) as usize] = false;
        }
        Self { size, walls }
    }

    fn open(&self, (x, y): (i32, i32)) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && !self.walls[(y * self.size + x) as usize]
    }
}

impl Domain for Grid {
    type State = (i32, i32);
    type Action = (i32, i32);
    type Goal = (i32, i32);

    fn actions(&self, &(x, y): &(i32, i32)) -> Vec<(i32, i32)> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .into_iter()
            .filter(|&(dx, dy)| self.open((x + dx, y + dy)))
            .collect()
    }

    fn result(&self, &(x, y): &(i32, i32), &(dx, dy): &(i32, i32)) -> (i32, i32) {
        (x + dx, y + dy)
    }

    fn cost(&self, _state: &(i32, i32), _action: &(i32, i32)) -> f64 {
        1.0
    }

    fn heuristic(&self, &(x, y): &(i32, i32), &(gx, gy): &(i32, i32)) -> f64 {
        f64::from((gx - x).abs() + (gy - y).abs())
    }

    fn satisfies(&self, state: &(i32, i32), goal: &(i32, i32)) -> bool {
        state == goal
    }
}

fn bench_informed(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_informed");
    group.sample_size(10);
    for &size in &[5, 7, 9] {
        let grid = Grid::random(size, 0.2, 42);
        let problem = Problem::new(&grid, (0, 0), (size - 1, size - 1));
        for strategy in [Strategy::Greedy, Strategy::AStar] {
            let config = TreeConfig::default()
                .with_strategy(strategy)
                .with_limit((size * size) as usize);
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = TreeRunner::run(black_box(&problem), black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_uninformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_uninformed");
    group.sample_size(10);
    for &size in &[3, 4] {
        let grid = Grid::random(size, 0.0, 7);
        let problem = Problem::new(&grid, (0, 0), (size - 1, size - 1));
        for strategy in [Strategy::Breadth, Strategy::Depth, Strategy::Uniform] {
            let config = TreeConfig::default()
                .with_strategy(strategy)
                .with_limit((size * size) as usize);
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = TreeRunner::run(black_box(&problem), black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_informed, bench_uninformed);
criterion_main!(benches);
