//! Desktop shell for the Luma picture-book viewer.
//!
//! All navigation logic lives in `lumabook-core`; this binary translates
//! window events into core input events, drives the tick loop, and renders
//! whatever the core's screen model describes.

use std::time::Instant;

use eframe::egui;
use log::info;
use lumabook_core::{
    app::{TickResult, ViewerApp, ViewerConfig},
    deck::{self, LUMA_TITLE},
    fullscreen::FullscreenProvider,
    input::{InputEvent, Key, QueueInput},
    render::Screen,
};

#[path = "main/scene.rs"]
mod scene;

const INPUT_QUEUE_EVENTS: usize = 32;

/// Fullscreen capability over the egui viewport, rebuilt per frame.
struct ViewportFullscreen<'c> {
    ctx: &'c egui::Context,
}

impl FullscreenProvider for ViewportFullscreen<'_> {
    type Error = core::convert::Infallible;

    fn is_active(&self) -> bool {
        self.ctx.input(|i| i.viewport().fullscreen.unwrap_or(false))
    }

    fn request(&mut self) -> Result<(), Self::Error> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit(&mut self) -> Result<(), Self::Error> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }
}

struct ViewerShell {
    app: ViewerApp<'static, QueueInput<INPUT_QUEUE_EVENTS>>,
    started: Instant,
}

impl ViewerShell {
    fn new() -> Self {
        let deck = deck::default_luma_deck();
        info!("deck loaded: {} slides", deck.total_slides());

        Self {
            app: ViewerApp::new(deck, QueueInput::new(), ViewerConfig::default(), LUMA_TITLE),
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Translate this frame's raw egui events into core input events.
    fn forward_events(&mut self, ctx: &egui::Context) {
        let mut events: Vec<InputEvent> = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::Key {
                        key: egui::Key::ArrowRight,
                        pressed: true,
                        ..
                    } => events.push(InputEvent::Key(Key::ArrowRight)),
                    egui::Event::Key {
                        key: egui::Key::ArrowLeft,
                        pressed: true,
                        ..
                    } => events.push(InputEvent::Key(Key::ArrowLeft)),
                    egui::Event::Touch { phase, pos, .. } => match phase {
                        egui::TouchPhase::Start => {
                            events.push(InputEvent::TouchStart { x: pos.x as i32 });
                        }
                        egui::TouchPhase::End => {
                            events.push(InputEvent::TouchEnd { x: pos.x as i32 });
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            let scroll = input.scroll_delta;
            if scroll != egui::Vec2::ZERO {
                // Wheel deltas in the core grow in reading direction, like
                // browser deltas; egui scroll deltas grow the other way.
                events.push(InputEvent::Wheel {
                    delta_x: -scroll.x as i32,
                    delta_y: -scroll.y as i32,
                });
            }
        });

        self.app.with_input_mut(|queue| {
            for event in events {
                queue.push(event);
            }
        });
    }
}

impl eframe::App for ViewerShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.forward_events(ctx);

        let now_ms = self.now_ms();
        if self.app.tick(now_ms) == TickResult::RenderRequested || self.app.is_locked() {
            ctx.request_repaint();
        }

        let fullscreen_active = ViewportFullscreen { ctx }.is_active();
        let mut dismiss_splash = false;
        let mut toggle_fullscreen = false;

        egui::CentralPanel::default()
            .frame(scene::night_frame())
            .show(ctx, |ui| {
                self.app.with_screen(now_ms, |screen| match screen {
                    Screen::Splash { title } => {
                        dismiss_splash = scene::splash(ui, title);
                    }
                    Screen::Book {
                        slide,
                        slide_index,
                        slide_total,
                        turn,
                        ..
                    } => {
                        toggle_fullscreen = scene::book(
                            ui,
                            &slide,
                            slide_index,
                            slide_total,
                            turn,
                            fullscreen_active,
                        );
                    }
                });
            });

        if dismiss_splash {
            self.app.enter_viewing(now_ms);
            ctx.request_repaint();
        }
        if toggle_fullscreen {
            let mut fullscreen = ViewportFullscreen { ctx };
            // Infallible on this backend.
            let _ = fullscreen.toggle();
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(LUMA_TITLE)
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        LUMA_TITLE,
        options,
        Box::new(|_cc| Box::new(ViewerShell::new())),
    )
}
