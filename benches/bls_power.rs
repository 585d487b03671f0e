use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use exoseeker::lightcurve::synthetic::TransitModel;
use exoseeker::{estimate_best_transit, phase_fold, BlsParams, LightCurve};

/// Noisy curve with an injected box transit, reproducible across runs.
fn make_curve(n_points: usize, seed: u64) -> LightCurve {
    let model = TransitModel {
        period: 3.5,
        epoch: 1.2,
        duration_frac: 0.05,
        depth: 0.01,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    model.light_curve(n_points, 27.0, 5e-4, &mut rng).unwrap()
}

fn reduced_grid(n_periods: usize) -> BlsParams {
    BlsParams::builder()
        .min_period(0.5)
        .max_period(10.0)
        .n_periods(n_periods)
        .build()
        .unwrap()
}

/// Grid search cost as a function of light-curve size.
fn bench_search_by_curve_size(c: &mut Criterion) {
    let params = reduced_grid(500);

    for &n_points in &[200_usize, 1000, 5000] {
        let curve = make_curve(n_points, 0xC0FFEE);

        c.bench_function(&format!("bls/search_{n_points}_points"), |b| {
            b.iter(|| {
                let candidate = estimate_best_transit(black_box(&curve), black_box(&params));
                black_box(candidate.unwrap());
            })
        });
    }
}

/// Grid search cost as a function of period-grid density.
fn bench_search_by_grid_density(c: &mut Criterion) {
    let curve = make_curve(1000, 0xBADC0DE);

    for &n_periods in &[200_usize, 1000, 5000] {
        let params = reduced_grid(n_periods);

        c.bench_function(&format!("bls/search_{n_periods}_periods"), |b| {
            b.iter(|| {
                let candidate = estimate_best_transit(black_box(&curve), black_box(&params));
                black_box(candidate.unwrap());
            })
        });
    }
}

/// Folding alone is linear plus a sort; kept separate to watch regressions.
fn bench_phase_fold(c: &mut Criterion) {
    let curve = make_curve(5000, 0xFEED);

    c.bench_function("bls/phase_fold_5000_points", |b| {
        b.iter(|| {
            let folded = phase_fold(black_box(&curve), black_box(3.5), black_box(1.2));
            black_box(folded.unwrap());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_search_by_curve_size, bench_search_by_grid_density, bench_phase_fold
);
criterion_main!(benches);
