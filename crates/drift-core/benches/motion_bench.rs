//! Criterion benchmarks for motion generation.
//!
//! A full motion (plan + jitter + cadence) is generated once per scheduled
//! action, so it is nowhere near a hot path; these numbers exist to catch
//! accidental quadratic behaviour in the sampling loop.
//!
//! Run with:
//! ```bash
//! cargo bench --package drift-core --bench motion_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drift_core::{JitterConfig, MotionEngine, Point, TrajectoryPlanner};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_plan_by_complexity(c: &mut Criterion) {
    let planner = TrajectoryPlanner::default();
    let mut group = c.benchmark_group("plan_with_complexity");

    for complexity in [3u32, 5, 7] {
        group.bench_with_input(
            BenchmarkId::from_parameter(complexity),
            &complexity,
            |b, &complexity| {
                let mut rng = ChaCha8Rng::seed_from_u64(1);
                b.iter(|| {
                    planner.plan_with_complexity(
                        black_box(Point::new(0, 0)),
                        black_box(Point::new(1000, 800)),
                        complexity,
                        &mut rng,
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_jitter_apply(c: &mut Criterion) {
    let planner = TrajectoryPlanner::default();
    let jitter = JitterConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let trajectory = planner.plan_with_complexity(Point::new(0, 0), Point::new(1000, 800), 7, &mut rng);

    c.bench_function("jitter_apply_350_steps", |b| {
        b.iter(|| jitter.apply(black_box(trajectory.clone()), &mut rng))
    });
}

fn bench_engine_generate(c: &mut Criterion) {
    let engine = MotionEngine::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    c.bench_function("engine_generate", |b| {
        b.iter(|| engine.generate(black_box(Point::new(12, 34)), black_box(Point::new(1900, 1000)), &mut rng))
    });
}

criterion_group!(benches, bench_plan_by_complexity, bench_jitter_apply, bench_engine_generate);
criterion_main!(benches);
