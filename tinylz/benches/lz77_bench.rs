//! Performance benchmarks for the tinylz codec.
//!
//! Measures compression and decompression throughput across data patterns
//! that stress different parts of the match search: uniform runs (best
//! case), reproducible random bytes (worst case, all literals), and
//! text-like data with mid-range redundancy.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinylz::{compress, decompress};

/// Generate test data patterns for benchmarking.
mod test_data {
    /// Uniform data: every token covers a full 8-byte stride.
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Reproducible pseudo-random data: almost no matches survive the
    /// 31-byte window, so the encoder degenerates to literals.
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data: short words repeat well inside the window.
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk]);
        }
        data
    }
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [1024usize, 16 * 1024, 64 * 1024] {
        for (name, data) in [
            ("uniform", test_data::uniform(size)),
            ("random", test_data::random(size)),
            ("text", test_data::text_like(size)),
        ] {
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &data,
                |b, data| b.iter(|| compress(black_box(data))),
            );
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for size in [1024usize, 16 * 1024, 64 * 1024] {
        for (name, data) in [
            ("uniform", test_data::uniform(size)),
            ("random", test_data::random(size)),
            ("text", test_data::text_like(size)),
        ] {
            let packed = compress(&data);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(name, size),
                &packed,
                |b, packed| b.iter(|| decompress(black_box(packed)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
