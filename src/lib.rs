pub mod dsp;
pub mod error;
pub mod synth; // Voice pool, trigger messages, render loop
pub mod voices; // The three instrument implementations

pub use error::Error;

/// Number of simultaneous voices. The pool steals the oldest slot when full.
pub const VOICE_COUNT: usize = 4;
