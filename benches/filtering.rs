//! Benchmarks for chatsift parsing, filtering and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench filtering -- filter`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatsift::prelude::*;

// =============================================================================
// Test Data Generators
// =============================================================================

fn sender_for(i: usize) -> (&'static str, &'static str) {
    match i % 4 {
        0 => ("Vrunda Mundhra", "Human"),
        1 => ("Harshiv Gajjar", "Human"),
        2 => ("Stranger", "Human"),
        _ => ("Reminder Bot", "Bot"),
    }
}

fn generate_export_json(count: usize) -> String {
    let mut messages = Vec::with_capacity(count);
    for i in 0..count {
        let (name, user_type) = sender_for(i);
        messages.push(format!(
            r#"{{"creator": {{"name": "{}", "email": "user{}@example.com", "user_type": "{}"}}, "created_date": "Monday, 3 June 2024 at 10:{:02}:00 UTC", "text": "Message number {}", "topic_id": "t{}"}}"#,
            name,
            i % 4,
            user_type,
            i % 60,
            i,
            i
        ));
    }
    format!(r#"{{"messages": [{}]}}"#, messages.join(",\n"))
}

fn generate_messages(count: usize) -> Vec<RawMessage> {
    (0..count)
        .map(|i| {
            let (name, user_type) = sender_for(i);
            RawMessage::new(format!("Message number {}", i), name, user_type, format!("t{}", i))
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let json = generate_export_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let messages = parse_messages_str(black_box(json)).unwrap();
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let participants = Participants::default();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let messages = generate_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, messages| {
            b.iter(|| {
                let filtered = apply_filter(black_box(messages.clone()), &participants);
                black_box(filtered)
            });
        });
    }
    group.finish();
}

fn bench_output_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_json");
    let participants = Participants::default();

    for size in [100_usize, 1_000, 10_000] {
        let filtered = apply_filter(generate_messages(size), &participants);
        group.throughput(Throughput::Elements(filtered.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &filtered, |b, filtered| {
            b.iter(|| {
                let json = to_json(black_box(filtered)).unwrap();
                black_box(json)
            });
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let participants = Participants::default();

    for size in [1_000_usize, 10_000] {
        let json = generate_export_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let messages = parse_messages_str(black_box(json)).unwrap();
                let filtered = apply_filter(messages, &participants);
                let out = to_json(&filtered).unwrap();
                black_box(out)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parsing,
    bench_filter,
    bench_output_json,
    bench_full_pipeline,
);

criterion_main!(benches);
