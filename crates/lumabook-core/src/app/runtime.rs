impl<'d, IN> ViewerApp<'d, IN>
where
    IN: InputProvider,
{
    /// Complete the pending transition once its deadline has passed: apply
    /// the deferred slide mutation or mode change and release the lock in
    /// the same step, so no command can observe a half-finished turn.
    fn tick_transition(&mut self, now_ms: u64) -> TickResult {
        let Some(spec) = self.transition else {
            return TickResult::NoRender;
        };
        if !spec.is_complete(now_ms) {
            return TickResult::NoRender;
        }

        self.transition = None;

        match (spec.kind, self.ui) {
            (TransitionKind::PageNext, UiState::Viewing { current_slide }) => {
                let next = (current_slide + 1).min(self.deck.last_slide());
                debug!("nav: page turn complete, slide {current_slide} -> {next}");
                self.ui = UiState::Viewing {
                    current_slide: next,
                };
            }
            (TransitionKind::PagePrev, UiState::Viewing { current_slide }) => {
                let prev = current_slide.saturating_sub(1);
                debug!("nav: page turn complete, slide {current_slide} -> {prev}");
                self.ui = UiState::Viewing {
                    current_slide: prev,
                };
            }
            (TransitionKind::SplashReturn, UiState::Viewing { .. }) => {
                debug!("nav: splash return complete");
                self.ui = UiState::Splash;
                self.touch_start_x = None;
            }
            // A transition can only be started from Viewing and nothing
            // flips the mode while one is pending.
            (_, UiState::Splash) => {}
        }

        TickResult::RenderRequested
    }
}
