//! Benchmarks for directory scoring and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pfc_directory::{levenshtein, rank, rank_score, DirectoryRecord, RankOptions, ScoreMode, ScoreWeights};

fn create_test_records(count: usize) -> Vec<DirectoryRecord> {
    (0..count)
        .map(|i| {
            DirectoryRecord::new(
                format!("Fragrance House {i}"),
                format!("Director {}", i % 37),
            )
            .unwrap()
        })
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_typo_pair", |b| {
        b.iter(|| levenshtein(black_box("Scnet N Storeis"), black_box("Scent N Stories")))
    });
}

fn bench_single_score(c: &mut Criterion) {
    let record = DirectoryRecord::new("Scent N Stories", "Saad Afridi").unwrap();
    let weights = ScoreWeights::default();

    c.bench_function("rank_score_single", |b| {
        b.iter(|| {
            rank_score(
                black_box("scnet stories"),
                black_box(&record),
                ScoreMode::PrimaryWeighted,
                &weights,
            )
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_directory");

    for size in [10, 100, 1000].iter() {
        let records = create_test_records(*size);
        let options = RankOptions::default();

        group.bench_with_input(BenchmarkId::new("typo_query", size), size, |b, _| {
            b.iter(|| rank(black_box("fragrnce huose"), black_box(&records), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_single_score, bench_rank);
criterion_main!(benches);
