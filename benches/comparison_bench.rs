use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, PathingGrid, Position, SearchOptions};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 32;

/// A seeded random grid with a quarter of its cells blocked, plus start/goal pairs drawn from
/// its free cells.
fn random_benchmark(seed: u64) -> (PathingGrid, Vec<(Position, Position)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = PathingGrid::new(N, N, false).unwrap();
    for row in 0..N as i32 {
        for col in 0..N as i32 {
            grid.set(Position::new(row, col), rng.gen_bool(0.25));
        }
    }
    let free = grid.free_cells().collect::<Vec<_>>();
    let scenarios = (0..N_SCENARIOS)
        .map(|_| {
            let start = *free.choose(&mut rng).unwrap();
            let goal = *free.choose(&mut rng).unwrap();
            (start, goal)
        })
        .collect();
    (grid, scenarios)
}

fn random_grid_bench(c: &mut Criterion) {
    let (grid, scenarios) = random_benchmark(0);
    for allow_diagonal in [false, true] {
        let options = SearchOptions::default().with_diagonal(allow_diagonal);
        let diag_str = if allow_diagonal { "8-grid" } else { "4-grid" };
        for algorithm in Algorithm::all() {
            c.bench_function(format!("random {N}x{N}, {algorithm} {diag_str}").as_str(), |b| {
                b.iter(|| {
                    for (start, goal) in &scenarios {
                        black_box(algorithm.solve(&grid, *start, *goal, options).unwrap());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, random_grid_bench);
criterion_main!(benches);
