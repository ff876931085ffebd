//! Numeric helpers shared by the voices.

use std::f32::consts::TAU;

/// Linear interpolation between `a` and `b` by `t` in [0, 1].
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Sine of a normalized phase, where one cycle is `phase` advancing by 1.0.
///
/// Phase accumulators in this crate count cycles, not radians, so the 2π
/// scaling lives in one place.
#[inline(always)]
pub fn sin_phase(phase: f32) -> f32 {
    (TAU * phase).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn sin_phase_cycles() {
        assert!(sin_phase(0.0).abs() < 1e-6);
        assert!((sin_phase(0.25) - 1.0).abs() < 1e-6);
        assert!((sin_phase(0.75) + 1.0).abs() < 1e-6);
    }
}
