/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WIN_WIDTH: u32 = 800;
    pub const WIN_HEIGHT: u32 = 600;

    // Paddle
    pub const PADDLE_WIDTH_FRAC: f32 = 0.02; // of window width
    pub const PADDLE_HEIGHT_FRAC: f32 = 0.20; // of window height
    pub const PADDLE_INSET: f32 = 50.0; // distance from the side edge
    pub const PADDLE_SPEED: f32 = 500.0; // pixels per second
    pub const AI_REACH: f32 = 0.7; // fraction of half-height the AI tolerates

    // Ball
    pub const BALL_RADIUS_FRAC: f32 = 0.02; // of window height
    pub const BALL_SERVE_XV: f32 = 100.0;
    pub const BALL_SPEED_INITIAL: f32 = 1.0;
    pub const BALL_SPEED_RAMP: f32 = 0.001; // added every frame, never capped
    pub const BALL_FADE_PERIOD: f32 = 0.2;
    pub const BALL_FADE_STEP: u8 = 10;

    // Left paddle deflection bands
    pub const NUDGE_OUTER: f32 = 20.0;
    pub const NUDGE_INNER: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u32 = 3;
    pub const SCORE_GLYPH_Y: f32 = 35.0;
    pub const SCORE_GLYPH_SIZE: i32 = 10;
    pub const SCORE_GLYPH_LERP: f32 = 0.2;
    pub const CENTER_GLYPH: usize = 2;
    pub const CENTER_GLYPH_SIZE: i32 = 20;

    // Frame pacing
    pub const FRAME_FLOOR_SECS: f32 = 0.005;
}
