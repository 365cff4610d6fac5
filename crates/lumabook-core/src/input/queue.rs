use heapless::Deque;
use log::warn;

use super::{InputEvent, InputProvider};

/// Fixed-capacity event queue a host pushes raw events into between ticks.
/// Overflow drops the newest event; a backlog that deep means the host is
/// not ticking, and stale navigation input is worthless anyway.
#[derive(Default, Debug)]
pub struct QueueInput<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> QueueInput<N> {
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if self.events.push_back(event).is_err() {
            warn!("input: queue full, dropping {event:?}");
        }
    }
}

impl<const N: usize> InputProvider for QueueInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
