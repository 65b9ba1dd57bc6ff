//! Benchmarks for the curve bootstrap.
//!
//! Run with: cargo bench -p pillar-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pillar_core::daycounts::{Act360, DayCount};
use pillar_core::schedule::generate_schedule;
use pillar_core::Date;
use pillar_curves::{BootstrapInstrument, CurveBootstrapper, DiscountCurve};

struct BenchOis {
    start: Date,
    schedule: Vec<Date>,
    rate: f64,
}

impl BootstrapInstrument<DiscountCurve> for BenchOis {
    fn end_date(&self) -> Date {
        self.schedule[self.schedule.len() - 1]
    }

    fn npv(&self, curve: &DiscountCurve) -> f64 {
        let floating = curve.discount_factor(self.end_date()) - curve.discount_factor(self.start);
        let fixed: f64 = self
            .schedule
            .windows(2)
            .map(|p| curve.discount_factor(p[1]) * Act360.year_fraction(p[0], p[1]) * self.rate)
            .sum();
        floating + fixed
    }
}

fn ois(start: Date, years: i32, rate: f64) -> BenchOis {
    let end = start.add_months(12 * years).unwrap();
    BenchOis {
        start,
        schedule: generate_schedule(start, end, 12).unwrap(),
        rate,
    }
}

fn bench_bootstrap(c: &mut Criterion) {
    let today = Date::from_ymd(2024, 1, 2).unwrap();
    let mut group = c.benchmark_group("ois_bootstrap");

    for pillars in [5, 10, 30] {
        group.bench_with_input(BenchmarkId::from_parameter(pillars), &pillars, |b, &n| {
            b.iter(|| {
                let mut bootstrapper = CurveBootstrapper::<DiscountCurve>::new(today);
                for years in 1..=n {
                    let rate = 0.02 + 0.0005 * f64::from(years);
                    bootstrapper.add_instrument(ois(today, years, rate)).unwrap();
                }
                bootstrapper.run().unwrap();
                black_box(bootstrapper.into_curve().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_curve_lookup(c: &mut Criterion) {
    let today = Date::from_ymd(2024, 1, 2).unwrap();
    let dates: Vec<Date> = (1..=30)
        .map(|y| today.add_months(12 * y).unwrap())
        .collect();
    let values: Vec<f64> = (1..=30).map(|y| (-0.03 * f64::from(y)).exp()).collect();
    let curve = DiscountCurve::new(today, dates, values).unwrap();
    let sample = today.add_days(4_000);

    c.bench_function("discount_factor", |b| {
        b.iter(|| black_box(curve.discount_factor(black_box(sample))));
    });
}

criterion_group!(bootstrap, bench_bootstrap);
criterion_group!(curve_ops, bench_curve_lookup);
criterion_main!(bootstrap, curve_ops);
