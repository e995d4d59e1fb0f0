//! Criterion benchmarks for the tick loop hot path.
//!
//! The per-tick window recompute is O(n), so runtime scales with both the
//! series length and the window length; both axes are benchmarked.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bandlab_core::{BollingerStrategy, PricePoint, Strategy, StrategyEngine};

fn make_points(n: usize) -> Vec<PricePoint> {
    let base = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let price = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            PricePoint::new(base + chrono::Duration::days(i as i64), price)
        })
        .collect()
}

fn bench_tick_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_loop");
    for series_len in [1_000, 10_000] {
        let points = make_points(series_len);
        group.bench_with_input(
            BenchmarkId::from_parameter(series_len),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut strategy = BollingerStrategy::new(20, 0.75, 10.0).unwrap();
                    for point in points {
                        strategy.tick(point.date, point.price);
                    }
                    black_box(strategy.transactions().len())
                });
            },
        );
    }
    group.finish();
}

fn bench_window_len(c: &mut Criterion) {
    let points = make_points(5_000);
    let mut group = c.benchmark_group("window_len");
    for window in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| {
                let mut engine = StrategyEngine::new(points.clone());
                engine.register(
                    "bollinger",
                    Box::new(BollingerStrategy::new(window, 0.75, 10.0).unwrap()),
                );
                engine.start();
                black_box(engine.strategy("bollinger").unwrap().report().len())
            });
        });
    }
    group.finish();
}

fn bench_moving_means(c: &mut Criterion) {
    let points = make_points(10_000);
    let mut strategy = BollingerStrategy::new(20, 0.75, 10.0).unwrap();
    for point in &points {
        strategy.tick(point.date, point.price);
    }

    c.bench_function("moving_means_10k", |b| {
        b.iter(|| black_box(strategy.moving_means().len()));
    });
}

criterion_group!(benches, bench_tick_loop, bench_window_len, bench_moving_means);
criterion_main!(benches);
