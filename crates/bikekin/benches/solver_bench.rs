//! Criterion benchmarks for the frame, four-bar and rider solves.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p bikekin

use bikekin::fourbar::{solve_fourbar, FourBarSpec};
use bikekin::frame::{solve_frame, FrameConfig};
use bikekin::rider::{crank_angles, RiderConfig, RiderKinematics};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_crank_rockers(n: usize, seed: u64) -> Vec<(FourBarSpec, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            // short crank, long links: always Grashof crank-rocker
            let spec = FourBarSpec {
                o2: Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
                o4: Vector2::new(rng.gen_range(12.0..14.0), rng.gen_range(-1.0..1.0)),
                o2a: rng.gen_range(1.0..2.0),
                ab: rng.gen_range(12.0..14.0),
                bo4: rng.gen_range(8.0..10.0),
            };
            (spec, rng.gen::<f64>() * std::f64::consts::TAU)
        })
        .collect()
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");

    group.bench_function("frame_road_default", |b| {
        let cfg = FrameConfig::road_default();
        b.iter(|| solve_frame(&cfg).unwrap())
    });

    for &n in &[1usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("fourbar", n), &n, |b, &n| {
            b.iter_batched(
                || random_crank_rockers(n, 43),
                |cases| {
                    for (spec, theta2) in &cases {
                        let _sol = solve_fourbar(spec, *theta2).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    let geometry = solve_frame(&FrameConfig::road_default()).unwrap();
    for &step in &[5.0f64, 1.0] {
        let angles = crank_angles(0.0, 360.0, step).unwrap();
        group.bench_with_input(
            BenchmarkId::new("rider_revolution", angles.len()),
            &angles,
            |b, angles| {
                b.iter_batched(
                    || RiderKinematics::new(RiderConfig::reference(), &geometry).unwrap(),
                    |mut rider| {
                        let _states = rider.sweep(angles.iter().copied()).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
