impl<'d, IN> ViewerApp<'d, IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("input: provider error, dropping remaining events");
                    break;
                }
            }
        }
    }

    /// Per-device translation into the two navigation commands. The splash
    /// swallows everything; it is dismissed by the host calling
    /// `enter_viewing`, not by navigation input.
    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if self.ui == UiState::Splash {
            return;
        }

        match event {
            InputEvent::Key(Key::ArrowRight) => self.advance(now_ms),
            InputEvent::Key(Key::ArrowLeft) => self.retreat(now_ms),
            InputEvent::Wheel { delta_x, delta_y } => {
                self.apply_wheel(delta_x, delta_y, now_ms);
            }
            InputEvent::TouchStart { x } => {
                self.touch_start_x = Some(x);
            }
            InputEvent::TouchEnd { x } => {
                self.apply_touch_end(x, now_ms);
            }
        }
    }

    /// Any nonzero delta on either axis is a command; there is no wheel
    /// dead-zone. One event maps to at most one command, forward deltas
    /// winning when axes disagree, and the transition lock serializes the
    /// rest of the burst.
    fn apply_wheel(&mut self, delta_x: i32, delta_y: i32, now_ms: u64) {
        if delta_y > 0 || delta_x > 0 {
            self.advance(now_ms);
        } else if delta_y < 0 || delta_x < 0 {
            self.retreat(now_ms);
        }
    }

    fn apply_touch_end(&mut self, end_x: i32, now_ms: u64) {
        let Some(start_x) = self.touch_start_x.take() else {
            return;
        };

        let diff = start_x - end_x;
        if diff.unsigned_abs() <= self.config.swipe_threshold_px as u32 {
            debug!("input: swipe of {diff}px inside dead-zone, ignored");
            return;
        }

        if diff > 0 {
            self.advance(now_ms);
        } else {
            self.retreat(now_ms);
        }
    }
}
