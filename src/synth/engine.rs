use crate::dsp::NoiseSource;
use crate::error::Error;
use crate::synth::message::{MessageReceiver, TriggerMessage};
use crate::synth::pool::VoicePool;
use crate::voices::Voice;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine configuration, validated once at construction. Rendering itself
/// cannot fail, so a bad sample rate is a hard error here rather than
/// garbage audio later.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Output sample rate in Hz, as negotiated by the host audio backend.
    pub sample_rate: u32,
    /// Seed for the shared noise source. Fixed by default so identical
    /// trigger sequences render identical audio across runs.
    pub noise_seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            noise_seed: crate::dsp::noise::DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        Ok(())
    }
}

fn validate_frequency(frequency: f32) -> Result<(), Error> {
    if !(frequency.is_finite() && frequency > 0.0) {
        return Err(Error::InvalidFrequency(frequency));
    }
    Ok(())
}

/// The synthesis engine: voice pool, shared noise source, and the message
/// drain that feeds the pool from the control thread.
///
/// The generic receiver decides the threading model:
///
/// - `Consumer<TriggerMessage>` (the `rtrb` SPSC ring buffer) for the
///   realtime case, paired with a [`SynthHandle`] on the control thread;
/// - `VecDeque<TriggerMessage>` or `()` for offline rendering and tests,
///   where the direct `trigger_*` methods suffice.
///
/// Everything on the render path is pure arithmetic: no allocation, no
/// locks, no unbounded loops. The noise source is owned here and only ever
/// touched between [`render_block`](Self::render_block) calls or inside
/// them, so draws stay confined to the render thread and the output is
/// deterministic for a given trigger sequence.
pub struct PolyEngine<R: MessageReceiver = ()> {
    config: EngineConfig,
    pool: VoicePool,
    noise: NoiseSource,
    rx: R,
}

impl<R: MessageReceiver> PolyEngine<R> {
    pub fn new(config: EngineConfig, rx: R) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            pool: VoicePool::new(),
            noise: NoiseSource::with_seed(config.noise_seed),
            rx,
        })
    }

    /// Install pending triggers, then additively mix every occupied voice
    /// slot into `out` (interleaved, `out.len() / channels` frames).
    ///
    /// The buffer is NOT cleared first: the engine contributes signal on
    /// top of whatever the caller put there. Zero-fill before calling if
    /// this engine is the only source.
    pub fn render_block(&mut self, out: &mut [f32], channels: usize) {
        debug_assert!(channels >= 1);
        debug_assert_eq!(out.len() % channels, 0);

        // Drain triggers before rendering so a message sent "now" sounds in
        // this block. Voices are constructed here, on the render side,
        // because the pluck excitation draws from the shared noise source.
        while let Some(msg) = self.rx.pop() {
            self.install(msg);
        }

        self.pool.render_into(out, channels, &mut self.noise);
    }

    /// Trigger a plucked string directly (single-threaded use).
    pub fn trigger_plucked_string(&mut self, frequency: f32) -> Result<(), Error> {
        validate_frequency(frequency)?;
        self.install(TriggerMessage::PluckedString { frequency });
        Ok(())
    }

    /// Trigger a kick drum directly (single-threaded use).
    pub fn trigger_kick(&mut self) {
        self.install(TriggerMessage::Kick);
    }

    /// Trigger an FM piano tone directly (single-threaded use).
    pub fn trigger_fm_piano(&mut self, frequency: f32) -> Result<(), Error> {
        validate_frequency(frequency)?;
        self.install(TriggerMessage::FmPiano { frequency });
        Ok(())
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn pool(&self) -> &VoicePool {
        &self.pool
    }

    fn install(&mut self, msg: TriggerMessage) {
        let sr = self.config.sample_rate;
        let voice = match msg {
            TriggerMessage::PluckedString { frequency } => {
                Voice::plucked_string(sr, frequency, &mut self.noise)
            }
            TriggerMessage::Kick => Voice::kick(sr),
            TriggerMessage::FmPiano { frequency } => Voice::fm_piano(sr, frequency),
        };
        self.pool.install(voice);
    }
}

#[cfg(feature = "rtrb")]
impl PolyEngine<Consumer<TriggerMessage>> {
    /// Build an engine plus its control-thread handle, connected by a
    /// lock-free SPSC queue of `capacity` pending triggers.
    pub fn with_queue(
        config: EngineConfig,
        capacity: usize,
    ) -> Result<(SynthHandle, Self), Error> {
        let (tx, rx) = RingBuffer::new(capacity);
        let engine = Self::new(config, rx)?;
        Ok((SynthHandle { tx }, engine))
    }
}

/// Control-thread side of the trigger queue.
///
/// Fire-and-forget: triggers are validated here, then handed to the render
/// thread without blocking. A full queue drops the trigger and reports
/// [`Error::QueueFull`] instead of stalling the control thread.
#[cfg(feature = "rtrb")]
pub struct SynthHandle {
    tx: Producer<TriggerMessage>,
}

#[cfg(feature = "rtrb")]
impl SynthHandle {
    pub fn trigger_plucked_string(&mut self, frequency: f32) -> Result<(), Error> {
        validate_frequency(frequency)?;
        self.send(TriggerMessage::PluckedString { frequency })
    }

    pub fn trigger_kick(&mut self) -> Result<(), Error> {
        self.send(TriggerMessage::Kick)
    }

    pub fn trigger_fm_piano(&mut self, frequency: f32) -> Result<(), Error> {
        validate_frequency(frequency)?;
        self.send(TriggerMessage::FmPiano { frequency })
    }

    fn send(&mut self, msg: TriggerMessage) -> Result<(), Error> {
        self.tx.push(msg).map_err(|_| Error::QueueFull)
    }
}
