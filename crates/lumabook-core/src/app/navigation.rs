impl<'d, IN> ViewerApp<'d, IN>
where
    IN: InputProvider,
{
    /// Dismiss the splash and show the cover. Instantaneous; no lock. Inert
    /// unless the splash is showing.
    pub fn enter_viewing(&mut self, _now_ms: u64) {
        if self.ui != UiState::Splash {
            return;
        }

        debug!("nav: enter viewing at cover");
        self.ui = UiState::Viewing { current_slide: 0 };
        self.touch_start_x = None;
        self.pending_redraw = true;
    }

    /// Turn to the next slide. Inert on the splash, while locked, and at
    /// the last slide (no lock is engaged for the rejected call).
    pub fn advance(&mut self, now_ms: u64) {
        let UiState::Viewing { current_slide } = self.ui else {
            return;
        };
        if self.transition.is_some() {
            debug!("nav: advance rejected, transition in flight");
            return;
        }
        if current_slide >= self.deck.last_slide() {
            debug!("nav: advance rejected at last slide {current_slide}");
            return;
        }

        self.start_transition(TransitionKind::PageNext, now_ms, self.config.page_turn_ms);
    }

    /// Turn to the previous slide, or leave for the splash when already on
    /// the cover. Inert on the splash and while locked.
    pub fn retreat(&mut self, now_ms: u64) {
        let UiState::Viewing { current_slide } = self.ui else {
            return;
        };
        if self.transition.is_some() {
            debug!("nav: retreat rejected, transition in flight");
            return;
        }

        if current_slide == 0 {
            // Scene change, not a page turn; shorter and directionless.
            self.start_transition(
                TransitionKind::SplashReturn,
                now_ms,
                self.config.splash_return_ms,
            );
        } else {
            self.start_transition(TransitionKind::PagePrev, now_ms, self.config.page_turn_ms);
        }
    }

    /// Sole site that engages the lock. The slide mutation itself is
    /// deferred to `tick_transition` so the state flips exactly when the
    /// host's animation ends.
    fn start_transition(&mut self, kind: TransitionKind, now_ms: u64, duration_ms: u16) {
        debug!("nav: start {kind:?} at {now_ms}ms for {duration_ms}ms");
        self.transition = Some(TransitionSpec::new(kind, now_ms, duration_ms));
        self.pending_redraw = true;
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::TransitionFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }
}
