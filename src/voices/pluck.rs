//! Plucked string voice (Karplus-Strong).

use crate::dsp::math::lerp;
use crate::dsp::NoiseSource;

/*
Karplus-Strong String Synthesis
===============================

A plucked string is modelled as a short burst of noise circulating through
a delay line with a gentle low-pass filter in the feedback path.

Vocabulary
----------

  delay line    A circular buffer of samples. Sound "travels" through it
                the way a wave travels up and down a real string.

  excitation    The initial energy put into the string - here a burst of
                noise filling the whole delay line, like the wideband
                "snap" of a plectrum.

  damping       The feedback filter. Averaging two adjacent cells removes
                a little high-frequency energy every pass, so the tone
                darkens and decays exactly the way a real string does:
                bright attack, mellow sustain.

The Loop
--------

Each output sample does two independent jobs:

  1. DAMP: average the cell at `pos` with its predecessor and write the
     result back, then advance `pos`. One full trip around the buffer
     low-passes the entire "string" once.

  2. READ: the output tap walks the buffer at a fractional rate `inc`,
     linearly interpolating between adjacent cells. The fundamental
     frequency is the rate at which the tap completes laps:

         f = inc * sample_rate / LINE_LEN
           = frequency              (by choice of inc)

     so `inc = frequency * LINE_LEN / sample_rate` tunes the string.

The pitch and the decay rate are emergent from LINE_LEN, `inc`, and the
two-tap average. Changing any coefficient retunes the instrument, so the
constants below are not free parameters.
*/

/// Delay line length. Power of two so positions wrap with a mask.
const LINE_LEN: usize = 256;
const LINE_MASK: usize = LINE_LEN - 1;

/// Output gain. The noise-filled line starts hot; 1/16 brings a single
/// pluck in line with the other voices.
const GAIN: f32 = 1.0 / 16.0;

pub struct PluckedString {
    line: [f32; LINE_LEN],
    /// Damping filter position.
    pos: usize,
    /// Fractional read-tap position, in cells.
    phase: f64,
    /// Read-tap advance per output sample, in cells.
    inc: f64,
}

impl PluckedString {
    pub fn new(sample_rate: u32, frequency: f32, noise: &mut NoiseSource) -> Self {
        // Two draws summed give a triangular distribution, a softer
        // excitation than raw uniform noise.
        let mut line = [0.0f32; LINE_LEN];
        for cell in line.iter_mut() {
            *cell = noise.next_sample() + noise.next_sample() - 1.0;
        }

        Self {
            line,
            pos: 0,
            phase: 0.0,
            inc: frequency as f64 * LINE_LEN as f64 / sample_rate as f64,
        }
    }

    pub fn render_into(&mut self, out: &mut [f32], channels: usize) {
        for frame in out.chunks_exact_mut(channels) {
            // Damp: two-tap average written back in place.
            let prev = self.line[self.pos.wrapping_sub(1) & LINE_MASK];
            self.line[self.pos] = (self.line[self.pos] + prev) / 2.0;
            self.pos = (self.pos + 1) & LINE_MASK;

            // Read: linear interpolation at the fractional tap.
            let base = self.phase as usize;
            let frac = (self.phase - base as f64) as f32;
            let a = self.line[base & LINE_MASK];
            let b = self.line[(base + 1) & LINE_MASK];
            let val = lerp(a, b, frac) * GAIN;

            self.phase += self.inc;
            if self.phase >= LINE_LEN as f64 {
                self.phase -= LINE_LEN as f64;
            }

            for sample in frame.iter_mut() {
                *sample += val;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_mono(voice: &mut PluckedString, frames: usize) -> Vec<f32> {
        let mut buffer = vec![0.0f32; frames];
        voice.render_into(&mut buffer, 1);
        buffer
    }

    #[test]
    fn produces_signal_then_decays() {
        let mut noise = NoiseSource::new();
        let mut voice = PluckedString::new(48_000, 440.0, &mut noise);

        let first = render_mono(&mut voice, 4800);
        // Skip ahead a few seconds; the string should be much quieter.
        for _ in 0..40 {
            render_mono(&mut voice, 4800);
        }
        let later = render_mono(&mut voice, 4800);

        let rms = |buf: &[f32]| {
            (buf.iter().map(|&s| (s as f64).powi(2)).sum::<f64>() / buf.len() as f64).sqrt()
        };

        assert!(rms(&first) > 1e-3, "pluck should be audible at onset");
        assert!(
            rms(&later) < rms(&first) / 4.0,
            "pluck should decay: onset {} vs later {}",
            rms(&first),
            rms(&later)
        );
    }

    #[test]
    fn fundamental_matches_target_frequency() {
        let sample_rate = 48_000u32;
        let target = 440.0f32;

        let mut noise = NoiseSource::new();
        let mut voice = PluckedString::new(sample_rate, target, &mut noise);

        // Let the excitation noise settle into a periodic waveform first.
        render_mono(&mut voice, 24_000);
        let window = render_mono(&mut voice, 8192);

        // Autocorrelation peak over lags spanning 340..600 Hz. Harmonics
        // would fool a zero-crossing count, but the correlation maximum
        // lands on the true period.
        let autocorr = |lag: usize| {
            window[..4096]
                .iter()
                .zip(&window[lag..lag + 4096])
                .map(|(&a, &b)| a as f64 * b as f64)
                .sum::<f64>()
        };

        let expected_lag = sample_rate as f32 / target; // ~109.1 samples
        let best_lag = (80..140).max_by(|&a, &b| autocorr(a).total_cmp(&autocorr(b)));

        let best_lag = best_lag.unwrap() as f32;
        assert!(
            (best_lag - expected_lag).abs() / expected_lag < 0.05,
            "period {best_lag} samples, expected {expected_lag}"
        );
    }

    #[test]
    fn adds_same_sample_to_all_channels() {
        let mut noise = NoiseSource::new();
        let mut voice = PluckedString::new(48_000, 220.0, &mut noise);

        let mut buffer = vec![0.0f32; 128 * 2];
        voice.render_into(&mut buffer, 2);

        for frame in buffer.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }
}
