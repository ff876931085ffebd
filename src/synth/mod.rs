// Purpose: voice pool, trigger hand-off, and the render loop.
// This layer sits above the voice implementations and owns all shared
// mutable state (the slot array and the noise source).

pub mod engine;
pub mod message;
pub mod pool;

pub use engine::{EngineConfig, PolyEngine};
pub use message::{MessageReceiver, TriggerMessage};
pub use pool::VoicePool;

#[cfg(feature = "rtrb")]
pub use engine::SynthHandle;
