//! Input abstraction layer.

mod mock;
mod queue;

pub use mock::MockInput;
pub use queue::QueueInput;

/// Keys the viewer reacts to. Hosts filter everything else out before the
/// event reaches the core.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

/// Raw device events as delivered by the host, one per gesture step. The
/// translation into navigation commands lives in the app, gated on the
/// current mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Wheel tick. Positive deltas scroll forward on either axis.
    Wheel { delta_x: i32, delta_y: i32 },
    /// Horizontal start coordinate of a touch gesture, in pixels.
    TouchStart { x: i32 },
    /// Horizontal end coordinate of the same gesture.
    TouchEnd { x: i32 },
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
