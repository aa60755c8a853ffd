use std::time::{Duration, Instant};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32, // Wall-clock length of the previous frame
}

impl Time {
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Measures frame length and enforces a minimum frame time by sleeping.
///
/// `begin` marks the start of a frame; `finish` returns the seconds the frame
/// took, sleeping first if it came in under the floor.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_start: Instant,
    floor: Duration,
}

impl FrameClock {
    pub fn new(floor_secs: f32) -> Self {
        Self {
            frame_start: Instant::now(),
            floor: Duration::from_secs_f32(floor_secs),
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn finish(&self) -> f32 {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.floor {
            std::thread::sleep(self.floor - elapsed);
            return self.frame_start.elapsed().as_secs_f32();
        }
        elapsed.as_secs_f32()
    }
}
