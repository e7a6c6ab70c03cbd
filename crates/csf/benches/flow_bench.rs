//! Criterion benchmarks for the per-frame flow pipeline.
//! Focus sizes: blob vertex counts in {50, 200, 800}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use csf::flow::{clean, flow_step, full_step, remesh, StepCfg};
use csf::shapes::{draw_blob, BlobCfg};
use csf::Curve;

fn blob(n: usize, seed: u64) -> Curve {
    let cfg = BlobCfg {
        vertices: n,
        // keep the mean spacing near the default target of 5
        radius: 5.0 * n as f64 / std::f64::consts::TAU,
        radial_jitter: 0.2,
        ..BlobCfg::default()
    };
    draw_blob(cfg, seed).expect("valid blob params")
}

fn bench_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow");
    let cfg = StepCfg::default();
    for &n in &[50usize, 200, 800] {
        group.bench_with_input(BenchmarkId::new("curvature", n), &n, |b, &n| {
            let cu = blob(n, 41);
            b.iter(|| cu.curvature().max())
        });

        group.bench_with_input(BenchmarkId::new("flow_step", n), &n, |b, &n| {
            let cu = blob(n, 42);
            b.iter(|| flow_step(&cu, 0.1))
        });

        group.bench_with_input(BenchmarkId::new("remesh_clean", n), &n, |b, &n| {
            b.iter_batched(
                || blob(n, 43),
                |mut cu| {
                    remesh(&mut cu, cfg.spacing);
                    clean(&mut cu);
                    cu
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("full_step", n), &n, |b, &n| {
            b.iter_batched(
                || blob(n, 44),
                |cu| full_step(cu, 1.0, &cfg),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow);
criterion_main!(benches);
