use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;

/// Check if ball left the court and award the point.
///
/// Returns the side that scored. On a score the ball is re-served from the
/// centre and both paddles are recentred.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = world.query::<&Ball>().iter().next().and_then(|(_e, ball)| {
        if ball.pos.x < 0.0 {
            Some(Side::Right)
        } else if ball.pos.x > config.width() {
            Some(Side::Left)
        } else {
            None
        }
    })?;

    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
    }
    reset_on_score(world, config, rng);

    Some(scorer)
}

/// Put the ball back at centre and both paddles at rest height
pub fn reset_on_score(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.center(), config.ball_speed_initial, rng);
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = config.paddle_rest_y();
    }
}

/// Zero both scores if either side has reached `win_score`.
/// Returns true when a new match was started.
pub fn reset_if_won(world: &mut World, config: &Config) -> bool {
    let won = world
        .query::<&Paddle>()
        .iter()
        .any(|(_e, p)| p.score >= config.win_score);
    if won {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.score = 0;
        }
    }
    won
}

pub fn scores(world: &World) -> (u32, u32) {
    let mut left = 0;
    let mut right = 0;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = paddle.score,
            Side::Right => right = paddle.score,
        }
    }
    (left, right)
}
