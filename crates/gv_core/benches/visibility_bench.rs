//! Benchmark visibility algorithms and the observation pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gv_core::{
    observe, Agent, Grid, GridObject, KernelConfig, Orientation, Position,
    VisibilityKind,
};

/// Square room with a wall every third cell of every third row.
fn pillared_room(size: usize) -> Grid {
    let mut grid = Grid::new(size, size).expect("positive size");
    for p in grid.positions().collect::<Vec<_>>() {
        if p.y % 3 == 1 && p.x % 3 == 1 {
            grid.set(p, GridObject::Wall).expect("in bounds");
        }
    }
    grid
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    for size in [7usize, 15, 31] {
        let grid = pillared_room(size);
        let origin = Position::new(size as i32 - 1, size as i32 / 2);
        for kind in VisibilityKind::ALL {
            let function = kind.build();
            let mut rng = KernelConfig::default().rng();
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                b.iter(|| {
                    let mask = function.compute(black_box(&grid), black_box(origin), &mut rng);
                    black_box(mask)
                })
            });
        }
    }
    group.finish();
}

fn bench_observe(c: &mut Criterion) {
    let grid = pillared_room(31);
    let agent = Agent::new(Position::new(15, 15), Orientation::E);
    let config = KernelConfig::raytracing();
    let function = config.visibility_function();
    let mut rng = config.rng();

    c.bench_function("observe_9x9_raytracing", |b| {
        b.iter(|| {
            let obs = observe(
                black_box(&grid),
                black_box(&agent),
                config.window,
                function.as_ref(),
                &mut rng,
            );
            black_box(obs)
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let grid = pillared_room(15);
    let jobs: Vec<_> = grid.positions().map(|p| (grid.clone(), p)).collect();
    let function = VisibilityKind::StochasticRaytracing.build();

    c.bench_function("compute_batch_225_jobs", |b| {
        b.iter(|| black_box(gv_core::compute_batch(function.as_ref(), black_box(&jobs), 7)))
    });
}

criterion_group!(benches, bench_algorithms, bench_observe, bench_batch);
criterion_main!(benches);
