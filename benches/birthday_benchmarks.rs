//! Performance benchmarks for the upcoming birthdays query.
//!
//! These benchmarks measure the query under various conditions:
//! - Different directory sizes
//! - A window spanning the new year
//! - The dispatcher path including reply formatting

use chrono::{Duration, NaiveDate};
use contact_assistant::{Assistant, ContactDirectory, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a directory with `size` contacts whose birthdays cycle through the year.
fn create_directory(size: usize) -> ContactDirectory {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut directory = ContactDirectory::new();

    for i in 0..size {
        let mut record = Record::with_name(format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let birthday = start + Duration::days((i % 365) as i64);
        record
            .set_birthday(&birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        directory.upsert(record);
    }

    directory
}

/// Benchmark the query with different directory sizes.
fn bench_upcoming_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("upcoming_birthdays_by_size");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for size in [10, 100, 1000, 10000].iter() {
        let directory = create_directory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(directory.upcoming_birthdays(black_box(today))));
        });
    }

    group.finish();
}

/// Benchmark a window that crosses into the next year.
fn bench_upcoming_year_boundary(c: &mut Criterion) {
    let directory = create_directory(1000);
    let today = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();

    c.bench_function("upcoming_birthdays_year_boundary", |b| {
        b.iter(|| black_box(directory.upcoming_birthdays(black_box(today))));
    });
}

/// Benchmark the `birthdays` command end to end.
fn bench_birthdays_command(c: &mut Criterion) {
    let mut assistant = Assistant::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 7);
    for i in 0..1000 {
        assistant.handle_line(&format!("add Contact{} {:010}", i, i));
        assistant.handle_line(&format!("add-birthday Contact{} {:02}.06.1990", i, i % 30 + 1));
    }

    c.bench_function("birthdays_command", |b| {
        b.iter(|| black_box(assistant.handle_line(black_box("birthdays"))));
    });
}

criterion_group!(
    benches,
    bench_upcoming_by_size,
    bench_upcoming_year_boundary,
    bench_birthdays_command
);
criterion_main!(benches);
