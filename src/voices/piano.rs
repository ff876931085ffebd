//! FM piano voice.
//!
//! Two-operator FM with a decaying modulation index, plus a slightly
//! detuned unison oscillator for chorus thickness and a trace of noise for
//! texture.
//!
//! # How It Works
//!
//! 1. The modulator runs at 3× the carrier frequency (a 3:1 ratio gives
//!    odd, slightly metallic partials - the "hammer on string" character).
//! 2. The modulation index decays as `e^(-t)`, so the tone starts bright
//!    and mellows out, like a real piano note losing its upper partials.
//! 3. The amplitude envelope is `(1 - e^(-60t)) · e^(-t)`: a ~17 ms attack
//!    ramp against a one-second decay. Output is exactly zero at t = 0, so
//!    a trigger never clicks.
//! 4. A second sine at 1.01× the frequency beats against the carrier a few
//!    times a second, thickening the unison.
//!
//! State is single-precision throughout; the phase accumulators grow
//! without wrapping.

use crate::dsp::math::sin_phase;
use crate::dsp::NoiseSource;

/// Modulator-to-carrier frequency ratio.
const FM_RATIO: f32 = 3.0;

/// Modulation depth applied to the decaying index.
const FM_DEPTH: f32 = 1.0 / 20.0;

/// Attack rate, per second. 60/s puts the envelope within 1% of its
/// ceiling after ~77 ms.
const ATTACK_RATE: f32 = 60.0;

/// Unison detune factor.
const DETUNE: f32 = 1.01;

/// Noise texture level.
const NOISE_LEVEL: f32 = 0.01;

pub struct FmPiano {
    sample_rate: f32,
    freq: f32,
    /// Modulator phase, in cycles. Unbounded.
    fm: f32,
    /// Carrier phase, in cycles. Unbounded.
    phase: f32,
    /// Samples elapsed since the trigger.
    pos: u64,
}

impl FmPiano {
    pub fn new(sample_rate: u32, frequency: f32) -> Self {
        Self {
            sample_rate: sample_rate as f32,
            freq: frequency,
            fm: 0.0,
            phase: 0.0,
            pos: 0,
        }
    }

    pub fn render_into(&mut self, out: &mut [f32], channels: usize, noise: &mut NoiseSource) {
        for frame in out.chunks_exact_mut(channels) {
            let t = self.pos as f32 / self.sample_rate;

            self.fm += self.freq * FM_RATIO / self.sample_rate;
            self.phase += self.freq / self.sample_rate + (-t).exp() * sin_phase(self.fm) * FM_DEPTH;

            let env = (1.0 - (-ATTACK_RATE * t).exp()) * (-t).exp();
            let carrier = sin_phase(self.phase);
            let unison = sin_phase(t * self.freq * DETUNE);
            let val = env * (carrier + NOISE_LEVEL * noise.next_sample() + unison) / 2.0;

            self.pos += 1;
            for sample in frame.iter_mut() {
                *sample += val;
            }
        }
    }
}
