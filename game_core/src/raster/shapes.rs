use super::{DigitFont, PixelBuffer};
use crate::components::{Ball, Color, Paddle};
use crate::config::Config;
use crate::params::Params;

/// Fill a `w` x `h` rectangle whose top-left corner is (`x`, `y`)
pub fn fill_rect(buf: &mut PixelBuffer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for dy in 0..h {
        for dx in 0..w {
            buf.set_pixel(x + dx, y + dy, color);
        }
    }
}

/// Fill the disc of `radius` around (`cx`, `cy`), scanning the bounding
/// square in whole-pixel steps from `-radius`
pub fn fill_disc(buf: &mut PixelBuffer, cx: f32, cy: f32, radius: f32, color: Color) {
    let r2 = radius * radius;
    let mut y = -radius;
    while y < radius {
        let mut x = -radius;
        while x < radius {
            if x * x + y * y < r2 {
                buf.set_pixel((cx + x) as i32, (cy + y) as i32, color);
            }
            x += 1.0;
        }
        y += 1.0;
    }
}

/// Paddle body plus its score digit near the top of the screen
pub fn draw_paddle(buf: &mut PixelBuffer, paddle: &Paddle, font: &DigitFont, config: &Config) {
    fill_rect(
        buf,
        (paddle.pos.x - paddle.w / 2.0) as i32,
        (paddle.pos.y - paddle.h / 2.0) as i32,
        paddle.w as i32,
        paddle.h as i32,
        paddle.color,
    );

    font.draw(
        buf,
        config.score_glyph_pos(paddle.pos.x),
        paddle.color,
        Params::SCORE_GLYPH_SIZE,
        paddle.score as usize,
    );
}

pub fn draw_ball(buf: &mut PixelBuffer, ball: &Ball) {
    fill_disc(buf, ball.pos.x, ball.pos.y, ball.radius, ball.color);
}
