//! Benchmarks for cipher application and statistics.
//!
//! Measures per-cipher encryption throughput over a Cyrillic text and the
//! cost of building frequency tables and computing entropy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cyrcipher::alphabet::encode_cp1251;
use cyrcipher::keystream::Lfsr;
use cyrcipher::{analyze, entropy, RunConfig};

/// Sentence repeated to build the benchmark input.
const BENCH_SENTENCE: &str = "Съешь же ещё этих мягких французских булок, да выпей же чаю. ";

/// Number of sentence repetitions (about 64 KiB of text).
const REPEAT: usize = 1100;

fn bench_text() -> Vec<u8> {
    encode_cp1251(&BENCH_SENTENCE.repeat(REPEAT))
}

/// Encrypts the benchmark text with each reference cipher.
///
/// The LFSR cipher also pays for generating one keystream byte per input
/// byte.
fn bench_encrypt(c: &mut Criterion) {
    let text = bench_text();
    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for cipher in RunConfig::default().ciphers() {
        group.bench_with_input(
            BenchmarkId::from_parameter(cipher.kind()),
            &text,
            |b, text| {
                b.iter(|| cipher.encrypt(black_box(text)).unwrap());
            },
        );
    }

    group.finish();
}

/// Measures raw LFSR keystream generation.
fn bench_lfsr_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfsr_generate");
    group.throughput(Throughput::Bytes(65536));
    group.bench_function("64KiB", |b| {
        b.iter(|| Lfsr::new(black_box(0xAB)).generate(65536));
    });
    group.finish();
}

/// Frequency table and entropy over the Vigenère ciphertext.
fn bench_statistics(c: &mut Criterion) {
    let [_, _, vigenere, _] = RunConfig::default().ciphers();
    let out = vigenere.encrypt(&bench_text()).unwrap();

    let mut group = c.benchmark_group("statistics");
    group.throughput(Throughput::Bytes(out.len() as u64));
    group.bench_function("frequency_table", |b| {
        b.iter(|| analyze(black_box(&out)));
    });
    group.bench_function("entropy", |b| {
        b.iter(|| entropy(black_box(&out)));
    });
    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_lfsr_generate, bench_statistics);
criterion_main!(benches);
