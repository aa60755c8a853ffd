use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub win_width: u32,
    pub win_height: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ai_reach: f32,
    pub ball_radius: f32,
    pub ball_serve_xv: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_ramp: f32,
    pub ball_fade_period: f32,
    pub ball_fade_step: u8,
    pub nudge_outer: f32,
    pub nudge_inner: f32,
    pub win_score: u32,
    pub frame_floor_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        let w = Params::WIN_WIDTH as f32;
        let h = Params::WIN_HEIGHT as f32;
        Self {
            win_width: Params::WIN_WIDTH,
            win_height: Params::WIN_HEIGHT,
            paddle_width: w * Params::PADDLE_WIDTH_FRAC,
            paddle_height: h * Params::PADDLE_HEIGHT_FRAC,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_reach: Params::AI_REACH,
            ball_radius: h * Params::BALL_RADIUS_FRAC,
            ball_serve_xv: Params::BALL_SERVE_XV,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_ramp: Params::BALL_SPEED_RAMP,
            ball_fade_period: Params::BALL_FADE_PERIOD,
            ball_fade_step: Params::BALL_FADE_STEP,
            nudge_outer: Params::NUDGE_OUTER,
            nudge_inner: Params::NUDGE_INNER,
            win_score: Params::WIN_SCORE,
            frame_floor_secs: Params::FRAME_FLOOR_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f32 {
        self.win_width as f32
    }

    pub fn height(&self) -> f32 {
        self.win_height as f32
    }

    /// Window centre; the ball serves from here
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Resting y for both paddles
    pub fn paddle_rest_y(&self) -> f32 {
        (self.win_height / 2) as f32
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width() - self.paddle_inset,
        }
    }

    /// Clamp paddle Y to window bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.height() - half_height)
    }

    /// Score digits sit a fifth of the way from the paddle toward the centre
    pub fn score_glyph_pos(&self, paddle_x: f32) -> Vec2 {
        Vec2::new(
            lerp(paddle_x, self.center().x, Params::SCORE_GLYPH_LERP),
            Params::SCORE_GLYPH_Y,
        )
    }
}

pub fn lerp(a: f32, b: f32, pct: f32) -> f32 {
    a + pct * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 50.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 750.0, "Right paddle X position");
    }

    #[test]
    fn test_config_derived_sizes() {
        let config = Config::new();
        assert_eq!(config.paddle_width, 16.0);
        assert_eq!(config.paddle_height, 120.0);
        assert_eq!(config.ball_radius, 12.0);
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        assert_eq!(config.clamp_paddle_y(0.0), half_height);
        assert_eq!(config.clamp_paddle_y(1000.0), config.height() - half_height);
        let valid_y = 300.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_score_glyph_pos() {
        let config = Config::new();
        assert_eq!(config.score_glyph_pos(50.0), Vec2::new(120.0, 35.0));
        assert_eq!(config.score_glyph_pos(750.0), Vec2::new(680.0, 35.0));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(4.0, 4.0, 0.9), 4.0);
    }
}
