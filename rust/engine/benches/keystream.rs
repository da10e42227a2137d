//! Benchmarks for keystream generation and message encryption.
//!
//! Measures per-key cost of one generator round (joker steps, triple cut,
//! count cut, extraction) and end-to-end encryption throughput from a
//! seeded deck.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pontifex_engine::cipher::encrypt;
use pontifex_engine::deck::Deck;
use pontifex_engine::keystream::Keystream;

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 2024;

fn bench_next_key(c: &mut Criterion) {
    c.bench_function("next_key", |b| {
        let mut ks = Keystream::new(Deck::new_with_seed(BENCH_SEED));
        b.iter(|| black_box(ks.next_key().unwrap()));
    });
}

fn bench_encrypt(c: &mut Criterion) {
    let message = "The quick brown fox jumps over the lazy dog. ".repeat(8);
    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("message", |b| {
        b.iter(|| encrypt(black_box(&message), Deck::new_with_seed(BENCH_SEED)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_next_key, bench_encrypt);
criterion_main!(benches);
