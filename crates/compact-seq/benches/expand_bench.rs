use compact_seq::{complement, decode_run_length, expand_ranges, TimeInterval};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_expand_ranges(c: &mut Criterion) {
    let input = (0..200)
        .map(|i| format!("{}-{}", i * 100, i * 100 + 50))
        .collect::<Vec<_>>()
        .join(",");
    c.bench_function("expand_ranges/200_tokens", |b| {
        b.iter(|| expand_ranges(black_box(input.as_str()).split(',')))
    });
}

fn bench_decode_run_length(c: &mut Criterion) {
    let input = "A5B10CD3".repeat(100);
    c.bench_function("decode_run_length/800_chars", |b| {
        b.iter(|| decode_run_length(black_box(&input)))
    });
}

fn bench_complement(c: &mut Criterion) {
    let bound = TimeInterval::new(0, 1_000_000).unwrap();
    let cuts: Vec<TimeInterval> = (0..1000)
        .map(|i| TimeInterval::new(i * 1000 + 10, i * 1000 + 500).unwrap())
        .collect();
    c.bench_function("complement/1000_cuts", |b| {
        b.iter(|| complement(black_box(bound), black_box(&cuts)))
    });
}

criterion_group!(
    benches,
    bench_expand_ranges,
    bench_decode_run_length,
    bench_complement
);
criterion_main!(benches);
