use crate::{Ball, Config, Events, InputState, Paddle, Side};
use hecs::World;

/// Reflect the ball off the top and bottom edges
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > config.height() {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Vertical nudge for a hit at `y` on the left paddle, or `None` if the
/// ball is above or below it.
///
/// Five bands from top to bottom: outer (20), inner (10), centre (0),
/// inner (10), outer (20). The centre band spans a quarter-height either
/// side of the paddle centre; the remaining quarter splits evenly.
pub fn left_paddle_nudge(paddle: &Paddle, y: f32, config: &Config) -> Option<f32> {
    let py = paddle.pos.y;
    let h = paddle.h;

    if y >= py - h / 4.0 && y < py + h / 4.0 {
        Some(0.0)
    } else if (y >= py - h * 3.0 / 8.0 && y < py - h / 4.0)
        || (y >= py + h / 4.0 && y < py + h * 3.0 / 8.0)
    {
        Some(config.nudge_inner)
    } else if (y > py - h / 2.0 && y < py - h * 3.0 / 8.0)
        || (y >= py + h * 3.0 / 8.0 && y < py + h / 2.0)
    {
        Some(config.nudge_outer)
    } else {
        None
    }
}

/// Bounce the ball off the left paddle face.
///
/// The vertical nudge follows the keyboard's up/down keys at the moment of
/// contact, whoever is driving the paddle.
fn deflect_off_left(ball: &mut Ball, paddle: &Paddle, nudge: f32, input: &impl InputState) {
    if input.up() {
        ball.vel.y -= nudge;
    } else if input.down() {
        ball.vel.y += nudge;
    }
    ball.vel.x = -ball.vel.x;
    ball.pos.x = paddle.face_x() + ball.radius;
}

/// Check ball collisions with both paddles
pub fn check_paddle_collisions(
    world: &mut World,
    input: &impl InputState,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    let left = paddles.iter().find(|p| p.side == Side::Left);
    let right = paddles.iter().find(|p| p.side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(paddle) = left {
            if ball.pos.x - ball.radius < paddle.face_x() {
                if let Some(nudge) = left_paddle_nudge(paddle, ball.pos.y, config) {
                    deflect_off_left(ball, paddle, nudge, input);
                    events.ball_hit_paddle = true;
                }
            }
        }

        if let Some(paddle) = right {
            if ball.pos.x + ball.radius > paddle.face_x()
                && ball.pos.y > paddle.top()
                && ball.pos.y < paddle.bottom()
            {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = paddle.face_x() - ball.radius;
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Controller, KeyState};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Left, Controller::Keyboard);
        create_paddle(&mut world, &config, Side::Right, Controller::Ai);
        (world, config, Events::new())
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 5.0), Vec2::new(100.0, -4.0), 12.0);

        bounce_walls(&mut world, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, 4.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 100.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 595.0), Vec2::new(100.0, 4.0), 12.0);

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, -4.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_in_open_court() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(100.0, 4.0), 12.0);

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(ball(&world).vel.y, 4.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_centre_band_hit_has_no_nudge() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(60.0, 300.0), Vec2::new(-100.0, 3.0), 12.0);
        let up = KeyState { up: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &up, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel.y, 3.0, "Centre band adds nothing even with a key held");
        assert_eq!(ball.vel.x, 100.0);
        assert_eq!(ball.pos.x, 50.0 + 8.0 + 12.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_outer_band_nudge_follows_keyboard() {
        let (mut world, config, mut events) = setup_world();
        // 300 - 50 lies in the upper outer band (240, 285)
        create_ball(&mut world, Vec2::new(60.0, 250.0), Vec2::new(-100.0, 0.0), 12.0);
        let up = KeyState { up: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &up, &config, &mut events);
        assert_eq!(ball(&world).vel.y, -20.0);

        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(60.0, 350.0), Vec2::new(-100.0, 0.0), 12.0);
        let down = KeyState { down: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &down, &config, &mut events);
        assert_eq!(ball(&world).vel.y, 20.0);
        assert_eq!(ball(&world).vel.x, 100.0);
    }

    #[test]
    fn test_outer_band_without_keys_only_reflects() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(60.0, 250.0), Vec2::new(-100.0, 7.0), 12.0);

        check_paddle_collisions(&mut world, &KeyState::new(), &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(100.0, 7.0));
    }

    #[test]
    fn test_inner_band_gives_smaller_nudge() {
        let (mut world, config, mut events) = setup_world();
        // inner bands: [255, 270) and [330, 345)
        create_ball(&mut world, Vec2::new(60.0, 260.0), Vec2::new(-100.0, 0.0), 12.0);
        let up = KeyState { up: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &up, &config, &mut events);

        assert_eq!(ball(&world).vel, Vec2::new(100.0, -10.0));
    }

    #[test]
    fn test_band_layout() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, Vec2::new(50.0, 300.0), 16.0, 120.0, 500.0);
        let nudge = |y| left_paddle_nudge(&paddle, y, &config);

        assert_eq!(nudge(240.0), None, "Top edge is exclusive");
        assert_eq!(nudge(241.0), Some(20.0));
        assert_eq!(nudge(255.0), Some(10.0));
        assert_eq!(nudge(270.0), Some(0.0));
        assert_eq!(nudge(300.0), Some(0.0));
        assert_eq!(nudge(330.0), Some(10.0));
        assert_eq!(nudge(345.0), Some(20.0));
        assert_eq!(nudge(359.0), Some(20.0));
        assert_eq!(nudge(360.0), None);
    }

    #[test]
    fn test_down_key_nudge_is_ignored_while_up_held() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(60.0, 350.0), Vec2::new(-100.0, 0.0), 12.0);
        let both = KeyState { up: true, down: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &both, &config, &mut events);

        assert_eq!(ball(&world).vel.y, -20.0, "Up wins when both are held");
    }

    #[test]
    fn test_ball_beside_left_paddle_misses() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(60.0, 100.0), Vec2::new(-100.0, 0.0), 12.0);

        check_paddle_collisions(&mut world, &KeyState::new(), &config, &mut events);

        assert_eq!(ball(&world).vel.x, -100.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(735.0, 320.0), Vec2::new(100.0, 5.0), 12.0);
        let up = KeyState { up: true, ..KeyState::new() };

        check_paddle_collisions(&mut world, &up, &config, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.vel, Vec2::new(-100.0, 5.0), "Right paddle never nudges");
        assert_eq!(ball.pos.x, 750.0 - 8.0 - 12.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_above_right_paddle_misses() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(735.0, 200.0), Vec2::new(100.0, 0.0), 12.0);

        check_paddle_collisions(&mut world, &KeyState::new(), &config, &mut events);

        assert_eq!(ball(&world).vel.x, 100.0);
        assert!(!events.ball_hit_paddle);
    }
}
