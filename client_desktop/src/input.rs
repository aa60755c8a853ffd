//! Keyboard input handling

use game_core::InputState;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held-key state built from winit key events
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard {
    up: bool,
    down: bool,
    launch: bool,
    quit: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down / key up event
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.apply(code, event.state == ElementState::Pressed);
        }
    }

    fn apply(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowUp | KeyCode::KeyW => self.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.down = pressed,
            KeyCode::Space => self.launch = pressed,
            KeyCode::Escape if pressed => self.quit = true,
            _ => {}
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Forget held keys; release events are lost while unfocused
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
        self.launch = false;
    }
}

impl InputState for Keyboard {
    fn up(&self) -> bool {
        self.up
    }

    fn down(&self) -> bool {
        self.down
    }

    fn launch(&self) -> bool {
        self.launch
    }

    fn quit(&self) -> bool {
        self.quit
    }
}
