//! Low-level DSP primitives used by the voice implementations.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to embed directly inside voice structs and to call from the audio
//! callback. They stay focused on the signal math; voice orchestration
//! lives in [`crate::synth`].

/// Small numeric helpers shared by the voices.
pub mod math;
/// Deterministic xorshift noise source.
pub mod noise;

pub use noise::NoiseSource;
