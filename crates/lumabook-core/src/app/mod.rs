//! Application state machine for the splash screen and the paginated book.

use log::debug;

use crate::{
    deck::PageDeck,
    input::{InputEvent, InputProvider, Key},
    render::{Screen, TransitionKind, TransitionSpec},
};

const DEFAULT_PAGE_TURN_MS: u16 = 800;
const DEFAULT_SPLASH_RETURN_MS: u16 = 500;
const DEFAULT_SWIPE_THRESHOLD_PX: u16 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Transition timing and gesture tuning. The two durations differ because a
/// page curl and the scene change back to the splash are visually different
/// animations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewerConfig {
    /// Page-turn duration (`advance`/`retreat` between slides).
    pub page_turn_ms: u16,
    /// Scene-change duration when retreating from the cover to the splash.
    pub splash_return_ms: u16,
    /// Minimum horizontal swipe distance before a touch gesture counts as a
    /// navigation command; anything shorter is treated as a tap or jitter.
    pub swipe_threshold_px: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            page_turn_ms: DEFAULT_PAGE_TURN_MS,
            splash_return_ms: DEFAULT_SPLASH_RETURN_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Splash,
    Viewing { current_slide: u16 },
}

pub struct ViewerApp<'d, IN>
where
    IN: InputProvider,
{
    deck: PageDeck<'d>,
    input: IN,
    config: ViewerConfig,
    book_title: &'static str,
    ui: UiState,
    /// `Some` is the navigation lock: no command is accepted while a
    /// transition is pending, and `tick` applies the deferred slide
    /// mutation once the deadline passes.
    transition: Option<TransitionSpec>,
    /// Horizontal start coordinate of the touch gesture in flight. The only
    /// state any input adapter keeps.
    touch_start_x: Option<i32>,
    pending_redraw: bool,
}

#[cfg(test)]
mod tests;

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
