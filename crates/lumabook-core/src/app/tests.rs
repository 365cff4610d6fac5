use super::*;
use crate::{
    deck::{SlideContent, default_luma_deck},
    input::{InputEvent, InputProvider, Key, MockInput, QueueInput},
    render::{Screen, TransitionKind},
};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

const TURN_MS: u64 = DEFAULT_PAGE_TURN_MS as u64;
const SPLASH_MS: u64 = DEFAULT_SPLASH_RETURN_MS as u64;

fn make_app<IN: InputProvider>(input: IN) -> ViewerApp<'static, IN> {
    ViewerApp::new(
        default_luma_deck(),
        input,
        ViewerConfig::default(),
        "Luma & her trip to the earth",
    )
}

fn current_slide<IN: InputProvider>(app: &ViewerApp<'static, IN>, now_ms: u64) -> Option<u16> {
    let mut index = None;
    app.with_screen(now_ms, |screen| {
        if let Screen::Book { slide_index, .. } = screen {
            index = Some(slide_index);
        }
    });
    index
}

fn is_splash<IN: InputProvider>(app: &ViewerApp<'static, IN>, now_ms: u64) -> bool {
    let mut splash = false;
    app.with_screen(now_ms, |screen| {
        splash = matches!(screen, Screen::Splash { .. });
    });
    splash
}

#[test]
fn starts_on_splash_and_enters_viewing_at_cover() {
    let mut app = make_app(MockInput::new());
    assert!(is_splash(&app, 0));

    app.enter_viewing(0);
    assert_eq!(current_slide(&app, 0), Some(0));
    assert!(!app.is_locked());

    app.with_screen(0, |screen| {
        let Screen::Book {
            slide, slide_total, ..
        } = screen
        else {
            panic!("expected book screen");
        };
        assert!(matches!(slide, SlideContent::Cover { .. }));
        assert_eq!(slide_total, 6);
    });
}

#[test]
fn entering_viewing_twice_is_inert() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);
    app.advance(0);
    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));

    app.enter_viewing(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));
}

#[test]
fn advance_walks_to_ending_and_saturates() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);

    let mut now = 0;
    for expected in 1..=5u16 {
        app.advance(now);
        assert!(app.is_locked());
        now += TURN_MS;
        let _ = app.tick(now);
        assert_eq!(current_slide(&app, now), Some(expected));
        assert!(!app.is_locked());
    }

    // Sixth advance on the ending slide: no state change, no lock.
    app.advance(now);
    assert!(!app.is_locked());
    let _ = app.tick(now + TURN_MS);
    assert_eq!(current_slide(&app, now + TURN_MS), Some(5));
}

#[test]
fn advance_during_turn_is_rejected_not_queued() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);

    app.advance(0);
    app.advance(0);
    app.advance(TURN_MS / 2);

    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));

    // Nothing was deferred: no new transition after the first completed.
    let _ = app.tick(TURN_MS * 2);
    assert_eq!(current_slide(&app, TURN_MS * 2), Some(1));
}

#[test]
fn retreat_turns_back_one_slide() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);
    app.advance(0);
    let _ = app.tick(TURN_MS);
    app.advance(TURN_MS);
    let _ = app.tick(2 * TURN_MS);
    assert_eq!(current_slide(&app, 2 * TURN_MS), Some(2));

    app.retreat(2 * TURN_MS);
    app.with_screen(2 * TURN_MS + 100, |screen| {
        let Screen::Book { locked, turn, .. } = screen else {
            panic!("expected book screen");
        };
        assert!(locked);
        assert_eq!(turn.map(|frame| frame.kind), Some(TransitionKind::PagePrev));
    });

    let _ = app.tick(3 * TURN_MS);
    assert_eq!(current_slide(&app, 3 * TURN_MS), Some(1));
}

#[test]
fn retreat_on_cover_returns_to_splash_after_short_transition() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);

    app.retreat(0);
    assert!(app.is_locked());

    // The scene change is not a page turn: locked, but no turn direction.
    app.with_screen(100, |screen| {
        let Screen::Book {
            slide_index,
            locked,
            turn,
            ..
        } = screen
        else {
            panic!("expected book screen during splash return");
        };
        assert_eq!(slide_index, 0);
        assert!(locked);
        let direction = turn.and_then(|frame| frame.kind.turn_direction());
        assert_eq!(direction, None);
    });

    // Shorter than a page turn.
    let _ = app.tick(SPLASH_MS - 1);
    assert!(!is_splash(&app, SPLASH_MS - 1));
    let _ = app.tick(SPLASH_MS);
    assert!(is_splash(&app, SPLASH_MS));

    // Re-entry resumes at the cover, not some deeper slide.
    app.enter_viewing(SPLASH_MS);
    assert_eq!(current_slide(&app, SPLASH_MS), Some(0));
}

#[test]
fn commands_during_splash_return_are_rejected() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);
    app.retreat(0);

    app.advance(100);
    app.retreat(100);

    let _ = app.tick(SPLASH_MS);
    assert!(is_splash(&app, SPLASH_MS));
}

#[test]
fn arrow_keys_drive_navigation() {
    let events = [InputEvent::Key(Key::ArrowRight)];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    assert!(app.is_locked());
    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));
}

#[test]
fn arrow_left_on_cover_leads_back_to_splash() {
    let events = [InputEvent::Key(Key::ArrowLeft)];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    let _ = app.tick(SPLASH_MS);
    assert!(is_splash(&app, SPLASH_MS));
}

#[test]
fn splash_swallows_navigation_input() {
    let events = [
        InputEvent::Key(Key::ArrowRight),
        InputEvent::Wheel {
            delta_x: 0,
            delta_y: 12,
        },
        InputEvent::TouchStart { x: 400 },
        InputEvent::TouchEnd { x: 100 },
    ];
    let mut app = make_app(ScriptedInput::new(&events));

    let _ = app.tick(0);
    assert!(is_splash(&app, 0));

    // Nothing leaked into the book either.
    app.enter_viewing(0);
    assert_eq!(current_slide(&app, 0), Some(0));
    assert!(!app.is_locked());
}

#[test]
fn zero_delta_wheel_event_is_ignored() {
    let events = [InputEvent::Wheel {
        delta_x: 0,
        delta_y: 0,
    }];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    assert!(!app.is_locked());
    assert_eq!(current_slide(&app, 0), Some(0));
}

#[test]
fn wheel_burst_advances_exactly_once() {
    let events = [
        InputEvent::Wheel {
            delta_x: 0,
            delta_y: 3,
        },
        InputEvent::Wheel {
            delta_x: 0,
            delta_y: 7,
        },
        InputEvent::Wheel {
            delta_x: 2,
            delta_y: 0,
        },
    ];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));
    let _ = app.tick(2 * TURN_MS);
    assert_eq!(current_slide(&app, 2 * TURN_MS), Some(1));
}

#[test]
fn wheel_negative_delta_retreats() {
    let events = [InputEvent::Wheel {
        delta_x: -4,
        delta_y: 0,
    }];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    let _ = app.tick(SPLASH_MS);
    assert!(is_splash(&app, SPLASH_MS));
}

#[test]
fn swipe_inside_dead_zone_is_ignored() {
    // |diff| = 49: a tap, not a swipe.
    let events = [
        InputEvent::TouchStart { x: 100 },
        InputEvent::TouchEnd { x: 51 },
    ];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    assert!(!app.is_locked());
    assert_eq!(current_slide(&app, 0), Some(0));
}

#[test]
fn swipe_past_dead_zone_advances() {
    // |diff| = 51, start right of end: forward swipe.
    let events = [
        InputEvent::TouchStart { x: 100 },
        InputEvent::TouchEnd { x: 49 },
    ];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));
}

#[test]
fn swipe_right_retreats() {
    let mut app = make_app(QueueInput::<8>::new());
    app.enter_viewing(0);
    app.advance(0);
    let _ = app.tick(TURN_MS);
    assert_eq!(current_slide(&app, TURN_MS), Some(1));

    app.with_input_mut(|queue| {
        queue.push(InputEvent::TouchStart { x: 49 });
        queue.push(InputEvent::TouchEnd { x: 100 });
    });
    let _ = app.tick(TURN_MS);
    let _ = app.tick(2 * TURN_MS);
    assert_eq!(current_slide(&app, 2 * TURN_MS), Some(0));
}

#[test]
fn touch_end_without_start_is_ignored() {
    let events = [InputEvent::TouchEnd { x: 0 }];
    let mut app = make_app(ScriptedInput::new(&events));
    app.enter_viewing(0);

    let _ = app.tick(0);
    assert!(!app.is_locked());
}

#[test]
fn slide_index_stays_in_bounds_under_arbitrary_commands() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);

    // Retreats past the cover re-enter viewing; advances past the ending
    // saturate. The index must never leave 0..=5.
    let script: [(bool, u16); 14] = [
        (false, 0),
        (true, 1),
        (true, 2),
        (true, 3),
        (true, 4),
        (true, 5),
        (true, 5),
        (true, 5),
        (false, 4),
        (false, 3),
        (false, 2),
        (false, 1),
        (false, 0),
        (true, 1),
    ];

    let mut now = 0;
    for (forward, expected) in script {
        if forward {
            app.advance(now);
        } else {
            app.retreat(now);
        }
        now += TURN_MS;
        let _ = app.tick(now);

        if is_splash(&app, now) {
            app.enter_viewing(now);
        }
        let index = current_slide(&app, now).unwrap();
        assert!(index <= 5);
        assert_eq!(index, expected);
    }
}

#[test]
fn tick_requests_render_while_turn_is_animating() {
    let mut app = make_app(MockInput::new());
    app.enter_viewing(0);
    let _ = app.tick(0);

    app.advance(10);
    assert_eq!(app.tick(10), TickResult::RenderRequested);
    // Mid-flight, no new state: still needs frames for the animation.
    assert_eq!(app.tick(10 + TURN_MS / 2), TickResult::RenderRequested);
    // Completion itself renders once more, then the app goes quiet.
    assert_eq!(app.tick(10 + TURN_MS), TickResult::RenderRequested);
    assert_eq!(app.tick(20 + TURN_MS), TickResult::NoRender);
}
