use crate::{Ball, Config, Controller, InputState, Paddle, Time};
use hecs::World;

/// Integrate ball position and ramp its speed
///
/// Velocity is scaled by the speed multiplier, which grows by a fixed step
/// every frame. Each time the multiplier lands within a hair of a multiple
/// of the fade period the ball loses some green and blue.
pub fn move_ball(world: &mut World, time: &Time, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt * ball.speed;
        ball.speed += config.ball_speed_ramp;
        if ball.speed % config.ball_fade_period < 0.001 {
            ball.fade(config.ball_fade_step);
        }
    }
}

/// Apply keyboard movement to human-controlled paddles
pub fn move_paddles(world: &mut World, input: &impl InputState, time: &Time, config: &Config) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Keyboard {
            continue;
        }
        if input.up() && paddle.top() > 0.0 {
            paddle.pos.y -= paddle.speed * time.dt;
        }
        if input.down() && paddle.bottom() < config.height() {
            paddle.pos.y += paddle.speed * time.dt;
        }

        // Clamp to window bounds
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
