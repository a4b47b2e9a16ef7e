//! Benchmarks for the dashboard summary transforms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dashboard::dataset::{Dataset, LaunchRecord, Outcome};
use launch_dashboard::query::{pie_summary, scatter_summary, PayloadRange, SiteFilter};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                BOOSTERS[i % BOOSTERS.len()],
                outcome,
            )
        })
        .collect();
    Dataset::from_records(records)
}

fn bench_pie_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("pie_summary");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteFilter::parse(SITES[0]);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| pie_summary(black_box(&dataset), black_box(&SiteFilter::All)))
        });

        group.bench_function(format!("one_site_{}", size), |b| {
            b.iter(|| pie_summary(black_box(&dataset), black_box(&site)))
        });
    }

    group.finish();
}

fn bench_scatter_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("scatter_summary");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let site = SiteFilter::parse(SITES[2]);
        let full = dataset.default_payload_range();
        let narrow = PayloadRange::new(2000.0, 4000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("full_range_{}", size), |b| {
            b.iter(|| scatter_summary(black_box(&dataset), &SiteFilter::All, black_box(full)))
        });

        group.bench_function(format!("narrow_one_site_{}", size), |b| {
            b.iter(|| scatter_summary(black_box(&dataset), &site, black_box(narrow)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pie_summary, bench_scatter_summary);
criterion_main!(benches);
