use crate::{Ball, Config, Controller, Paddle, Time};
use hecs::World;

/// Steer AI paddles toward the ball.
///
/// The paddle moves at full speed whenever the ball's lower edge leaves the
/// band of `ai_reach` half-heights around its centre, and holds otherwise.
/// No prediction and no smoothing.
pub fn track_ball(world: &mut World, time: &Time, config: &Config) {
    let target = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y + ball.radius,
        None => return,
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Ai {
            continue;
        }
        let reach = paddle.h / 2.0 * config.ai_reach;
        if paddle.pos.y + reach < target {
            paddle.pos.y += paddle.speed * time.dt;
        } else if paddle.pos.y - reach > target {
            paddle.pos.y -= paddle.speed * time.dt;
        }

        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}
