//! Deterministic noise source.

/*
Xorshift Noise
==============

Every stochastic element in the engine - the pluck excitation burst, the
kick's click transient, the piano's breath - draws from one shared noise
source. It is a 32-bit xorshift generator (Marsaglia's triplet 13/17/5):

    state ^= state << 13;
    state ^= state >> 17;
    state ^= state << 5;

Xorshift is ideal for audio noise: three shifts and three XORs per sample,
no multiplication, full 2^32 - 1 period, and a flat enough spectrum that it
reads as white noise. Its one statistical quirk matters here:

  THE ZERO TRAP: xorshift maps 0 to 0 forever. The state must start
  non-zero and, because the update is a bijection on the non-zero values,
  it then stays non-zero for the lifetime of the generator.

The raw state is mapped linearly onto the audio range:

    sample = (state - 2^31) / (2^31 - 1)

which spans roughly [-1.0, 1.0].

Determinism is load-bearing: the engine seeds one NoiseSource with a fixed
constant at construction and never reseeds, so a given trigger sequence
renders the exact same waveform on every run. For that to hold the source
must also be confined to a single thread - here it is owned by the engine
and only ever touched from the render path.
*/

/// Seed used when none is supplied. Marsaglia's example seed.
pub const DEFAULT_SEED: u32 = 2_463_534_242;

/// Deterministic white-noise generator over roughly [-1.0, 1.0].
#[derive(Debug, Clone, Copy)]
pub struct NoiseSource {
    state: u32,
}

impl NoiseSource {
    /// Create a noise source with the fixed default seed.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }

    /// Create a noise source with a caller-chosen seed.
    ///
    /// Zero is a fixed point of xorshift, so a zero seed is replaced with
    /// [`DEFAULT_SEED`].
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Advance the generator and return the next sample in ~[-1.0, 1.0].
    #[inline(always)]
    pub fn next_sample(&mut self) -> f32 {
        let mut y = self.state;
        y ^= y << 13;
        y ^= y >> 17;
        y ^= y << 5;
        self.state = y;

        (y as i64 - 2_147_483_648) as f32 / 2_147_483_647.0
    }
}

impl Default for NoiseSource {
    fn default() -> Self {
        Self::new()
    }
}
