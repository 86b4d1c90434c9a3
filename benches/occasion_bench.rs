// Benchmark for occasion computations
// Measures dashboard bucketing and range search over growing directories

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devotee_records::models::person::{Child, Person};
use devotee_records::services::occasion::OccasionService;

fn directory(size: usize) -> Vec<Person> {
    (0..size)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let day = (i % 28) as u32 + 1;
            Person::new(
                i.to_string(),
                format!("Devotee {}", i),
                format!("1980-{:02}-{:02}", month, day),
            )
            .unwrap()
            .with_marriage_date(format!("2005-{:02}-{:02}", (month % 12) + 1, day))
            .with_spouse(Some("Spouse"), format!("1982-{:02}-{:02}", month, (day % 27) + 2))
            .with_child(Child::new("Child", format!("2010-{:02}-{:02}", month, day)))
        })
        .collect()
}

fn bench_dashboard(c: &mut Criterion) {
    let service = OccasionService::new();
    let mut group = c.benchmark_group("dashboard");

    for size in [100, 1_000, 5_000] {
        let people = directory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &people, |b, people| {
            b.iter(|| service.get_dashboard(black_box(people), black_box("2025-01-15")))
        });
    }

    group.finish();
}

fn bench_range_search(c: &mut Criterion) {
    let service = OccasionService::new();
    let people = directory(1_000);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

    c.bench_function("search_between_three_years", |b| {
        b.iter(|| service.search_between(black_box(&people), start, end))
    });
}

criterion_group!(benches, bench_dashboard, bench_range_search);
criterion_main!(benches);
