//! Benchmarks for encode, decode and formatting.
//!
//! Measures the per-call cost of:
//! - Value-to-bytes encoding in both byte orders
//! - Bytes-to-value decoding, including the zero-extend path
//! - Hex and magnitude-suffix formatting

extern crate byteflip;

use byteflip::convert::bytes::{get_bytes, to_number};
use byteflip::convert::display::{number_str_with_unit, to_hex};
use byteflip::convert::round::round;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark encoding a u32 in little-endian order.
fn bench_get_bytes_u32_lsb(c: &mut Criterion) {
    c.bench_function("get_bytes_u32_lsb", |b| {
        b.iter(|| black_box(get_bytes(black_box(852_456_u32), false)));
    });
}

/// Benchmark encoding a double most-significant-byte-first.
fn bench_get_bytes_f64_msb(c: &mut Criterion) {
    c.bench_function("get_bytes_f64_msb", |b| {
        b.iter(|| black_box(get_bytes(black_box(852456.852456_f64), true)));
    });
}

/// Benchmark decoding a u32 from a full-width buffer.
fn bench_to_number_u32(c: &mut Criterion) {
    let buffer = [0xE8, 0x01, 0x0D, 0x00];

    c.bench_function("to_number_u32", |b| {
        b.iter(|| {
            let value: u32 = to_number(black_box(&buffer), 0, false).unwrap();
            black_box(value)
        });
    });
}

/// Benchmark decoding a u64 from a big-endian buffer.
fn bench_to_number_u64_msb(c: &mut Criterion) {
    let buffer = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    c.bench_function("to_number_u64_msb", |b| {
        b.iter(|| {
            let value: u64 = to_number(black_box(&buffer), 0, true).unwrap();
            black_box(value)
        });
    });
}

/// Benchmark the lenient zero-extend path on a short buffer.
fn bench_to_number_short_buffer(c: &mut Criterion) {
    let buffer = [0x10, 0x11, 0x00];

    c.bench_function("to_number_u32_short", |b| {
        b.iter(|| {
            let value: u32 = to_number(black_box(&buffer), 0, false).unwrap();
            black_box(value)
        });
    });
}

/// Benchmark hex formatting.
fn bench_to_hex(c: &mut Criterion) {
    c.bench_function("to_hex", |b| {
        b.iter(|| black_box(to_hex(black_box(852_456))));
    });
}

/// Benchmark magnitude-suffix formatting.
fn bench_number_str_with_unit(c: &mut Criterion) {
    c.bench_function("number_str_with_unit", |b| {
        b.iter(|| black_box(number_str_with_unit(black_box(2_500_000_000_000.0))));
    });
}

/// Benchmark truncating decimal scaling.
fn bench_round(c: &mut Criterion) {
    c.bench_function("round_4_places", |b| {
        b.iter(|| black_box(round(black_box(20.2523665582255), 4)));
    });
}

criterion_group!(
    benches,
    bench_get_bytes_u32_lsb,
    bench_get_bytes_f64_msb,
    bench_to_number_u32,
    bench_to_number_u64_msb,
    bench_to_number_short_buffer,
    bench_to_hex,
    bench_number_str_with_unit,
    bench_round
);
criterion_main!(benches);
