//! The three instrument implementations.
//!
//! Each voice is a self-contained sample generator: it owns exactly the
//! state needed to resume where the previous audio callback left off, and
//! it renders by ADDING into the caller's interleaved buffer, never by
//! overwriting it. All three are infinite generators - their envelopes
//! decay toward silence but no voice ever reports "finished". A voice stops
//! sounding only when the pool overwrites its slot with a newer trigger.
//!
//! # Example
//!
//! ```
//! use triad_synth::dsp::NoiseSource;
//! use triad_synth::voices::Voice;
//!
//! let mut noise = NoiseSource::new();
//! let mut voice = Voice::plucked_string(48_000, 440.0, &mut noise);
//!
//! let mut buffer = vec![0.0f32; 512]; // 256 stereo frames
//! voice.render_into(&mut buffer, 2, &mut noise);
//! ```

mod kick;
mod piano;
mod pluck;

pub use kick::KickDrum;
pub use piano::FmPiano;
pub use pluck::PluckedString;

use crate::dsp::NoiseSource;

/// One active sound-generating unit, occupying one pool slot.
///
/// A sum type rather than a trait object: the variants share no state, and
/// an enum keeps voice construction allocation-free so triggers can be
/// materialized inside the audio callback.
pub enum Voice {
    Pluck(PluckedString),
    Kick(KickDrum),
    Piano(FmPiano),
}

impl Voice {
    /// Karplus-Strong plucked string at `frequency` Hz.
    ///
    /// Draws from `noise` to fill the excitation burst, so construction
    /// must happen wherever the engine's noise source lives (the render
    /// thread, when triggers arrive over the message queue).
    pub fn plucked_string(sample_rate: u32, frequency: f32, noise: &mut NoiseSource) -> Self {
        Self::Pluck(PluckedString::new(sample_rate, frequency, noise))
    }

    /// Kick drum with a fixed pitch glide; no frequency parameter.
    pub fn kick(sample_rate: u32) -> Self {
        Self::Kick(KickDrum::new(sample_rate))
    }

    /// FM piano tone at `frequency` Hz.
    pub fn fm_piano(sample_rate: u32, frequency: f32) -> Self {
        Self::Piano(FmPiano::new(sample_rate, frequency))
    }

    /// Add this voice's next `out.len() / channels` frames into `out`.
    ///
    /// `out` is frame-major, channel-minor; the same mono sample is added
    /// to every channel of a frame. Existing buffer contents are preserved.
    #[inline]
    pub fn render_into(&mut self, out: &mut [f32], channels: usize, noise: &mut NoiseSource) {
        debug_assert!(channels >= 1);
        debug_assert_eq!(out.len() % channels, 0);

        match self {
            Self::Pluck(v) => v.render_into(out, channels),
            Self::Kick(v) => v.render_into(out, channels, noise),
            Self::Piano(v) => v.render_into(out, channels, noise),
        }
    }

    /// Human-readable instrument name, for meters and demo printouts.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pluck(_) => "pluck",
            Self::Kick(_) => "kick",
            Self::Piano(_) => "piano",
        }
    }
}
