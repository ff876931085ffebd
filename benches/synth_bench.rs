//! Benchmarks for the noise source, the individual voices, and a full
//! four-voice pool mix.
//!
//! Run with: cargo bench
//!
//! Reference deadlines at 48kHz sample rate:
//!   - 64 samples  = 1.33ms
//!   - 128 samples = 2.67ms
//!   - 256 samples = 5.33ms
//!   - 512 samples = 10.67ms

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use triad_synth::dsp::NoiseSource;
use triad_synth::synth::VoicePool;
use triad_synth::voices::Voice;

/// Common audio callback sizes.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");
    let mut noise = NoiseSource::new();

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("draw", size), &size, |b, &size| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for _ in 0..size {
                    acc += noise.next_sample();
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices");
    let mut noise = NoiseSource::new();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Pluck - delay line average plus interpolated read
        let mut voice = Voice::plucked_string(48_000, 440.0, &mut noise);
        group.bench_with_input(BenchmarkId::new("pluck", size), &size, |b, _| {
            b.iter(|| voice.render_into(black_box(&mut buffer), 1, &mut noise))
        });

        // Kick - two exp() and a sin() per sample, plus two noise draws
        let mut voice = Voice::kick(48_000);
        group.bench_with_input(BenchmarkId::new("kick", size), &size, |b, _| {
            b.iter(|| voice.render_into(black_box(&mut buffer), 1, &mut noise))
        });

        // Piano - three sin(), two exp(), one noise draw per sample
        let mut voice = Voice::fm_piano(48_000, 440.0);
        group.bench_with_input(BenchmarkId::new("piano", size), &size, |b, _| {
            b.iter(|| voice.render_into(black_box(&mut buffer), 1, &mut noise))
        });
    }

    group.finish();
}

fn bench_full_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/full_pool");
    let mut noise = NoiseSource::new();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * 2]; // stereo

        let mut pool = VoicePool::new();
        pool.install(Voice::plucked_string(48_000, 440.0, &mut noise));
        pool.install(Voice::plucked_string(48_000, 330.0, &mut noise));
        pool.install(Voice::kick(48_000));
        pool.install(Voice::fm_piano(48_000, 261.63));

        group.bench_with_input(
            BenchmarkId::new("four_voices_stereo", size),
            &size,
            |b, _| {
                b.iter(|| {
                    buffer.fill(0.0);
                    pool.render_into(black_box(&mut buffer), 2, &mut noise);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_noise, bench_voices, bench_full_pool);
criterion_main!(benches);
