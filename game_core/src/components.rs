use glam::Vec2;

/// RGB colour; the rasterizer never touches alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which edge of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Keyboard,
    Ai,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // centre
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, w: f32, h: f32, speed: f32) -> Self {
        Self {
            side,
            pos,
            w,
            h,
            speed,
            score: 0,
            color: Color::WHITE,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.h / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.h / 2.0
    }

    /// X of the face the ball bounces off
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.w / 2.0,
            Side::Right => self.pos.x - self.w / 2.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // multiplier on vel, ramps up every frame
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed: 1.0,
            color: Color::WHITE,
        }
    }

    /// Reset ball to `center` with a random downward drift in [0, 1).
    /// Horizontal velocity keeps its current direction and magnitude.
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = center;
        self.speed = speed;
        self.vel.y = rng.0.gen::<f32>();
        self.color = Color::WHITE;
    }

    /// Fade green and blue one step, leaving a redder ball
    pub fn fade(&mut self, step: u8) {
        if self.color.g > step && self.color.b > step {
            self.color.g -= step;
            self.color.b -= step;
        }
    }
}
