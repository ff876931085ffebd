use thiserror::Error;

/// Errors reported at the engine's configuration and trigger boundaries.
///
/// Nothing in the render path can fail: once a voice is installed, every
/// per-sample operation is total (indices are mask/modulo guarded). Bad
/// inputs are rejected up front instead of producing NaN audio.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("sample rate must be a positive number of Hz")]
    InvalidSampleRate,

    #[error("channel count must be at least 1")]
    InvalidChannelCount,

    #[error("frequency must be positive and finite, got {0}")]
    InvalidFrequency(f32),

    /// The control-to-render trigger queue is full. The trigger is dropped
    /// rather than blocking the caller; retry on the next control tick.
    #[error("trigger queue is full")]
    QueueFull,
}
