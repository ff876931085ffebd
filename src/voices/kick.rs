//! Kick drum voice.
//!
//! A classic synthesized kick: a sine wave whose pitch starts high and
//! drops fast toward the fundamental, creating the characteristic "punch".
//!
//! # How It Works
//!
//! 1. Instantaneous frequency glides exponentially: `150·e^(-25t) + 50` Hz,
//!    so the pitch falls from ~200 Hz toward a 50 Hz floor.
//! 2. The phase accumulator integrates that frequency, letting it grow
//!    without wrapping (the sine is periodic anyway).
//! 3. An `e^(-8t)` amplitude envelope gives an instant attack and a body
//!    that rings out over a few hundred milliseconds.
//! 4. A quiet noise transient, scaled by the envelope CUBED, adds "click"
//!    to the first instants and vanishes long before the body does.

use std::f64::consts::TAU;

use crate::dsp::NoiseSource;

/// Pitch glide: start offset above the floor, glide rate, floor frequency.
const GLIDE_DEPTH: f32 = 150.0;
const GLIDE_RATE: f32 = 25.0;
const FLOOR_HZ: f32 = 50.0;

/// Amplitude envelope decay rate, per second.
const DECAY_RATE: f32 = 8.0;

/// Noise transient level, applied to the cubed envelope.
const CLICK_LEVEL: f32 = 0.1;

pub struct KickDrum {
    sample_rate: f32,
    /// Accumulated carrier phase, in cycles. Unbounded.
    phase: f64,
    /// Samples elapsed since the trigger.
    pos: u64,
}

impl KickDrum {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate: sample_rate as f32,
            phase: 0.0,
            pos: 0,
        }
    }

    pub fn render_into(&mut self, out: &mut [f32], channels: usize, noise: &mut NoiseSource) {
        for frame in out.chunks_exact_mut(channels) {
            let t = self.pos as f32 / self.sample_rate;

            let freq = GLIDE_DEPTH * (-GLIDE_RATE * t).exp() + FLOOR_HZ;
            self.phase += freq as f64 / self.sample_rate as f64;

            let ampl = (-DECAY_RATE * t).exp();
            let body = ampl * (TAU * self.phase).sin() as f32;
            let click =
                ampl * ampl * ampl * CLICK_LEVEL * (noise.next_sample() - noise.next_sample());
            let val = (body + click) / 2.0;

            self.pos += 1;
            for sample in frame.iter_mut() {
                *sample += val;
            }
        }
    }
}
