//! Normalization Benchmarks — Order Path Arithmetic
//!
//! Benchmarks the decimal-shift functions that run on every order
//! submission and on every book level conversion.
//!
//! Run with: cargo bench --bench quantize_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use injective_spot_console::domain::quantize::{
    adjusted_order_quantity, round_to_tens, shift_decimal, tens_multiplier,
};

/// Benchmark the quantity adjustment with a negative resulting exponent.
fn bench_adjusted_quantity_negative(c: &mut Criterion) {
    c.bench_function("adjusted_quantity_negative_exponent", |b| {
        b.iter(|| {
            let _ = adjusted_order_quantity(black_box("1.25"), black_box(6), black_box(18));
        });
    });
}

/// Benchmark the quantity adjustment with a 30-place right shift.
fn bench_adjusted_quantity_large(c: &mut Criterion) {
    c.bench_function("adjusted_quantity_large_shift", |b| {
        b.iter(|| {
            let _ = adjusted_order_quantity(
                black_box("123456.789123456789"),
                black_box(18),
                black_box(6),
            );
        });
    });
}

/// Benchmark the raw decimal-point shift used per book level.
fn bench_level_shift(c: &mut Criterion) {
    c.bench_function("level_price_shift", |b| {
        b.iter(|| {
            let _ = shift_decimal(black_box("0.000000000000012"), black_box(12));
        });
    });
}

/// Benchmark tick annotation and grid snapping.
fn bench_tick_math(c: &mut Criterion) {
    c.bench_function("tens_multiplier", |b| {
        b.iter(|| {
            let _ = tens_multiplier(black_box("0.001"));
        });
    });

    c.bench_function("round_to_tens", |b| {
        b.iter(|| {
            let _ = round_to_tens(black_box("25.123456"), black_box(-3));
        });
    });
}

criterion_group!(
    benches,
    bench_adjusted_quantity_negative,
    bench_adjusted_quantity_large,
    bench_level_shift,
    bench_tick_math
);
criterion_main!(benches);
