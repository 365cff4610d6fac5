//! Viewer-level view models and transition metadata.

use crate::deck::SlideContent;

/// Direction of the page-turn visual a host should play.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnDirection {
    Next,
    Prev,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionKind {
    /// Page curl towards the next slide.
    PageNext,
    /// Page curl towards the previous slide.
    PagePrev,
    /// Scene change back to the splash; not a page turn, so it carries no
    /// turn direction.
    SplashReturn,
}

impl TransitionKind {
    pub fn turn_direction(self) -> Option<TurnDirection> {
        match self {
            Self::PageNext => Some(TurnDirection::Next),
            Self::PagePrev => Some(TurnDirection::Prev),
            Self::SplashReturn => None,
        }
    }
}

/// Snapshot of an in-flight transition for one rendered frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionFrame {
    pub kind: TransitionKind,
    /// 0..=100
    pub progress_pct: u8,
}

/// A started transition: doubles as the navigation lock while pending.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionSpec {
    pub kind: TransitionKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl TransitionSpec {
    pub const fn new(kind: TransitionKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn is_complete(self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms.max(1) as u64
    }

    pub fn frame(self, now_ms: u64) -> Option<TransitionFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(TransitionFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// App-level view model consumed by the host renderer.
pub enum Screen<'a> {
    Splash {
        title: &'a str,
    },
    Book {
        title: &'a str,
        slide: SlideContent<'a>,
        /// Zero-based.
        slide_index: u16,
        slide_total: u16,
        /// True while a transition is pending; hosts should mute further
        /// input affordances.
        locked: bool,
        /// Present only while a transition is visually in flight.
        turn: Option<TransitionFrame>,
    },
}
