// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for hot paths of the overlay controls.
//!
//! Measures the performance of:
//! - Time label formatting (runs on every time update)
//! - Speed quantization (runs on every slider drag event)

use criterion::{criterion_group, criterion_main, Criterion};
use speedplay::config::SpeedProfile;
use speedplay::domain::video::quantize_speed;
use speedplay::video_player::{format_time, time_label};
use std::hint::black_box;

/// Benchmark time formatting for the seek bar label.
fn bench_time_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback_controls");

    group.bench_function("format_time", |b| {
        b.iter(|| format_time(black_box(3_725.4)));
    });

    group.bench_function("time_label", |b| {
        b.iter(|| time_label(black_box(65.2), black_box(Some(7_200.0))));
    });

    group.finish();
}

/// Benchmark snapping raw slider values onto the extended profile's grid.
fn bench_quantize_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback_controls");
    let bounds = SpeedProfile::Extended.bounds();

    group.bench_function("quantize_speed_sweep", |b| {
        b.iter(|| {
            let mut speed = 0.0;
            while speed < 13.0 {
                black_box(quantize_speed(black_box(speed), bounds));
                speed += 0.13;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_time_format, bench_quantize_speed);
criterion_main!(benches);
