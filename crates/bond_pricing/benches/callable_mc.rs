//! Benchmarks for short-rate path generation and callable pricing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bond_models::instruments::{BondTerms, CallSchedule, Frequency};
use bond_pricing::mc::{
    generate_short_rate_paths, OasCallablePricer, ShortRateParams, SimulationConfig,
};

fn config(n_paths: usize) -> SimulationConfig {
    SimulationConfig::builder()
        .n_paths(n_paths)
        .steps_per_year(12)
        .seed(42)
        .build()
        .unwrap()
}

fn bench_path_generation(c: &mut Criterion) {
    let params = ShortRateParams::new(0.03, 0.2).unwrap();
    let mut group = c.benchmark_group("short_rate_paths");
    for n_paths in [1_000, 10_000] {
        group.bench_function(format!("{}_paths", n_paths), |b| {
            let cfg = config(n_paths);
            b.iter(|| {
                let paths =
                    generate_short_rate_paths(black_box(&cfg), black_box(&params), 5.0).unwrap();
                black_box(paths.n_paths())
            })
        });
    }
    group.finish();
}

fn bench_callable_pricing(c: &mut Criterion) {
    let params = ShortRateParams::new(0.03, 0.2).unwrap();
    let terms = BondTerms::new(100.0, 0.05, 5.0, Frequency::Annual).unwrap();
    let calls = CallSchedule::single(2.0, 101.0).unwrap();

    let mut group = c.benchmark_group("oas_callable");
    for n_paths in [1_000, 10_000] {
        group.bench_function(format!("{}_paths", n_paths), |b| {
            let pricer = OasCallablePricer::new(config(n_paths));
            b.iter(|| {
                let result = pricer
                    .price(
                        black_box(&terms),
                        black_box(Some(&calls)),
                        black_box(&params),
                        0.01,
                    )
                    .unwrap();
                black_box(result.price)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path_generation, bench_callable_pricing);
criterion_main!(benches);
