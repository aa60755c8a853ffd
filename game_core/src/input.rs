//! Backend-neutral keyboard queries

/// Named key queries the simulation reads each frame.
///
/// Backends translate their own key codes into these; nothing in the
/// simulation sees a scancode.
pub trait InputState {
    fn up(&self) -> bool;
    fn down(&self) -> bool;
    /// Serve / start the next point
    fn launch(&self) -> bool;
    fn quit(&self) -> bool;
}

/// Plain snapshot of the four queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub launch: bool,
    pub quit: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputState for KeyState {
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
