use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// A trigger request travelling from the control thread to the render
/// thread. Carries parameters only; the voice itself is constructed on the
/// render side, where the noise source lives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TriggerMessage {
    PluckedString { frequency: f32 },
    Kick,
    FmPiano { frequency: f32 },
}

/// Source of pending trigger messages, drained at the start of each render
/// block. Implementations must be wait-free: the render thread cannot block.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<TriggerMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<TriggerMessage> {
    fn pop(&mut self) -> Option<TriggerMessage> {
        Consumer::pop(self).ok()
    }
}

/// Single-threaded receiver for offline rendering and tests.
impl MessageReceiver for VecDeque<TriggerMessage> {
    fn pop(&mut self) -> Option<TriggerMessage> {
        self.pop_front()
    }
}

/// Receiver for an engine that is only ever triggered directly.
impl MessageReceiver for () {
    fn pop(&mut self) -> Option<TriggerMessage> {
        None
    }
}
