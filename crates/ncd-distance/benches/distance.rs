//! Benchmarks for distance computations
//!
//! Run with: cargo bench -p ncd-distance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ncd_distance::{Compressor, DeflateCompressor, Lz4Compressor, Ncd, ZstdCompressor};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn text_like(len: usize, seed: u64) -> Vec<u8> {
    const WORDS: &[&str] = &["planet", "orbit", "solar", "the", "of", "gas", "giant", "moon"];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        out.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
        out.push(b' ');
    }
    out.truncate(len);
    out
}

fn bench_symmetry_cost(c: &mut Criterion) {
    let sizes = [256, 4096, 65536];
    let mut group = c.benchmark_group("symmetry_cost");

    for size in sizes {
        let x = text_like(size, 1);
        let y = text_like(size, 2);
        let symmetric = Ncd::new(ZstdCompressor::default());
        let fast = symmetric.clone().enforce_symmetry(false);

        group.bench_with_input(BenchmarkId::new("symmetric", size), &size, |bencher, _| {
            bencher.iter(|| symmetric.distance(black_box(&x), black_box(&y)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("fast", size), &size, |bencher, _| {
            bencher.iter(|| fast.distance(black_box(&x), black_box(&y)).unwrap());
        });
    }

    group.finish();
}

fn bench_compressors(c: &mut Criterion) {
    let x = text_like(16384, 3);
    let y = text_like(16384, 4);
    let compressors: Vec<Box<dyn Compressor>> = vec![
        Box::new(ZstdCompressor::default()),
        Box::new(DeflateCompressor::default()),
        Box::new(Lz4Compressor),
    ];
    let mut group = c.benchmark_group("compressor");

    for compressor in compressors {
        let name = compressor.name().to_string();
        let engine = Ncd::new(compressor);
        group.bench_function(name, |bencher| {
            bencher.iter(|| engine.distance(black_box(&x), black_box(&y)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_symmetry_cost, bench_compressors);
criterion_main!(benches);
