//! Fullscreen capability abstraction.
//!
//! The core never tracks fullscreen state; the host's toggle queries and
//! drives its window layer through this contract.

/// Abstract fullscreen backend.
pub trait FullscreenProvider {
    type Error;

    fn is_active(&self) -> bool;
    fn request(&mut self) -> Result<(), Self::Error>;
    fn exit(&mut self) -> Result<(), Self::Error>;

    fn toggle(&mut self) -> Result<(), Self::Error> {
        if self.is_active() {
            self.exit()
        } else {
            self.request()
        }
    }
}
