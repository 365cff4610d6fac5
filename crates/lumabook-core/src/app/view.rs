impl<'d, IN> ViewerApp<'d, IN>
where
    IN: InputProvider,
{
    pub fn new(
        deck: PageDeck<'d>,
        input: IN,
        mut config: ViewerConfig,
        book_title: &'static str,
    ) -> Self {
        config.page_turn_ms = config.page_turn_ms.max(1);
        config.splash_return_ms = config.splash_return_ms.max(1);

        Self {
            deck,
            input,
            config,
            book_title,
            ui: UiState::Splash,
            transition: None,
            touch_start_x: None,
            pending_redraw: true,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        let rendered = self.tick_transition(now_ms);

        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        // Keep frames coming while a transition is animating.
        if self.transition_frame(now_ms).is_some() {
            return TickResult::RenderRequested;
        }

        rendered
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.ui {
            UiState::Splash => f(Screen::Splash {
                title: self.book_title,
            }),
            UiState::Viewing { current_slide } => f(Screen::Book {
                title: self.book_title,
                slide: self.deck.slide_at(current_slide),
                slide_index: current_slide,
                slide_total: self.deck.total_slides(),
                locked: self.transition.is_some(),
                turn: self.transition_frame(now_ms),
            }),
        }
    }

    /// True while a transition is pending; exposed for hosts that schedule
    /// their repaints around it.
    pub fn is_locked(&self) -> bool {
        self.transition.is_some()
    }

    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }
}
