use crate::dsp::NoiseSource;
use crate::voices::Voice;
use crate::VOICE_COUNT;

/// Fixed-capacity voice slots with a round-robin write cursor.
///
/// The cursor always points at the slot the NEXT trigger will overwrite,
/// and advances by one (mod capacity) after every install. This is strict
/// FIFO voice stealing: the fifth trigger replaces the first, whether or
/// not the first has decayed to silence. A stolen voice is dropped with no
/// fade-out, which can click; that hard cut is the engine's only cleanup
/// mechanism, since voices never terminate on their own.
pub struct VoicePool {
    slots: [Option<Voice>; VOICE_COUNT],
    cursor: usize,
}

impl VoicePool {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            cursor: 0,
        }
    }

    /// Install `voice` at the cursor slot, discarding the previous occupant,
    /// and advance the cursor. Never fails.
    pub fn install(&mut self, voice: Voice) {
        self.slots[self.cursor] = Some(voice);
        self.cursor = (self.cursor + 1) % VOICE_COUNT;
    }

    /// Additively render every occupied slot into `out`, in ascending slot
    /// order. The order is fixed so floating-point rounding is reproducible.
    /// The caller pre-fills the buffer; this only contributes signal.
    pub fn render_into(&mut self, out: &mut [f32], channels: usize, noise: &mut NoiseSource) {
        for slot in self.slots.iter_mut() {
            if let Some(voice) = slot {
                voice.render_into(out, channels, noise);
            }
        }
    }

    /// Number of occupied slots (never decreases once the pool fills).
    pub fn active_voices(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Inspect a slot, for meters and tests.
    pub fn slot(&self, index: usize) -> Option<&Voice> {
        self.slots[index].as_ref()
    }
}

impl Default for VoicePool {
    fn default() -> Self {
        Self::new()
    }
}
