use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::{FrameClock, Game, InputState};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::input::Keyboard;
use crate::renderer::Renderer;

/// Owns the window, the GPU side and the game, and drives one frame per redraw
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: Game,
    keyboard: Keyboard,
    clock: FrameClock,
    /// Length of the previous frame in seconds
    dt: f32,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(game: Game) -> Self {
        let clock = FrameClock::new(game.config.frame_floor_secs);
        Self {
            window: None,
            renderer: None,
            game,
            keyboard: Keyboard::new(),
            clock,
            dt: 0.0,
            error: None,
        }
    }

    /// The error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// Stop the loop; `main` reports the error on the way out
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.keep_first_error(err);
        event_loop.exit();
    }

    fn keep_first_error(&mut self, err: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Pong")
            .with_inner_size(LogicalSize::new(
                self.game.config.win_width,
                self.game.config.win_height,
            ))
            .with_resizable(true);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.game.config.win_width,
            self.game.config.win_height,
        ))
        .context("failed to initialise renderer")?;

        tracing::info!("window ready");
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.keyboard.quit() {
            event_loop.exit();
            return;
        }

        self.game.frame(&self.keyboard, self.dt);

        let events = &self.game.events;
        if events.ball_hit_paddle {
            tracing::debug!("paddle hit");
        }
        if events.ball_hit_wall {
            tracing::debug!("wall bounce");
        }

        if let Some(renderer) = self.renderer.as_mut() {
            if let Err(err) = renderer.present(&self.game.pixels) {
                self.fail(event_loop, err);
                return;
            }
        }

        self.dt = self.clock.finish();
    }
}

impl ApplicationHandler for App {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Poll | StartCause::Init) {
            self.clock.begin();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.keyboard.request_quit();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.handle_key(&event);
            }
            WindowEvent::Focused(false) => {
                self.keyboard.release_all();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.run_frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.keyboard.quit() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
