//! Benchmarks for the sliding window dictionary.
//!
//! Measures the longest-match search against different window contents and
//! the raw append throughput.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilzss_core::{MAX_MATCH, WINDOW_SIZE, Window};
use std::hint::black_box;

/// Text pattern with plenty of medium-length repeats.
fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let chunk = (size - data.len()).min(text.len());
        data.extend_from_slice(&text[..chunk]);
    }
    data
}

/// Pseudo-random data with no exploitable patterns.
fn random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn bench_find_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_match");

    let fills: [(&str, fn(usize) -> Vec<u8>); 3] = [
        ("uniform", |size| vec![0xAA; size]),
        ("text", text_like),
        ("random", random),
    ];

    for (name, generator) in fills {
        let fill = generator(WINDOW_SIZE);
        let mut window = Window::new();
        window.write_bytes(&fill);

        // A lookahead taken from the fill itself, so text/uniform windows
        // exercise the full comparison path.
        let lookahead: Vec<u8> = fill[..MAX_MATCH].to_vec();

        group.bench_with_input(BenchmarkId::from_parameter(name), &lookahead, |b, la| {
            b.iter(|| black_box(window.find_match(black_box(la))));
        });
    }

    group.finish();
}

fn bench_write_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_bytes");

    let data = text_like(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("64KB", |b| {
        b.iter(|| {
            let mut window = Window::new();
            window.write_bytes(black_box(&data));
            black_box(window.position());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_find_match, bench_write_bytes);
criterion_main!(benches);
