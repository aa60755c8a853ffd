pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod params;
pub mod raster;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use raster::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// One Pong match: entities, flow state and the frame being drawn
pub struct Game {
    pub world: World,
    pub fsm: GameFsm,
    pub time: Time,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub pixels: PixelBuffer,
    pub font: DigitFont,
}

impl Game {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, &config, Side::Left, Controller::Keyboard);
        create_paddle(&mut world, &config, Side::Right, Controller::Ai);
        create_ball(
            &mut world,
            config.center(),
            Vec2::new(config.ball_serve_xv, 0.0),
            config.ball_radius,
        );

        let pixels = PixelBuffer::new(config.win_width, config.win_height);

        Self {
            world,
            fsm: GameFsm::new(),
            time: Time::default(),
            config,
            events: Events::new(),
            rng,
            pixels,
            font: DIGITS,
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    /// Advance and redraw one frame.
    ///
    /// `dt` is the wall-clock length of the previous frame. Input must
    /// already reflect every event delivered since then.
    pub fn frame(&mut self, input: &impl InputState, dt: f32) {
        self.time.advance(dt);
        self.events.clear();

        match self.fsm.state() {
            GameState::Play => {
                // Drawn before the clear below, so it never reaches the screen
                self.font.draw(
                    &mut self.pixels,
                    self.config.center(),
                    Color::WHITE,
                    Params::CENTER_GLYPH_SIZE,
                    Params::CENTER_GLYPH,
                );
                self.update_ball(input);
                move_paddles(&mut self.world, input, &self.time, &self.config);
                track_ball(&mut self.world, &self.time, &self.config);
            }
            GameState::Start => {
                if input.launch()
                    && self.fsm.transition(GameAction::Launch)
                    && reset_if_won(&mut self.world, &self.config)
                {
                    tracing::info!("new match");
                }
            }
        }

        self.draw();
    }

    /// Move, bounce, score, then resolve paddle hits, in that order
    fn update_ball(&mut self, input: &impl InputState) {
        move_ball(&mut self.world, &self.time, &self.config);
        bounce_walls(&mut self.world, &self.config, &mut self.events);
        if let Some(side) = check_scoring(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.rng,
        ) {
            if self.fsm.transition(GameAction::Score) {
                let (left, right) = scores(&self.world);
                tracing::info!(?side, left, right, "point scored");
            }
        }
        check_paddle_collisions(&mut self.world, input, &self.config, &mut self.events);
    }

    fn draw(&mut self) {
        self.pixels.clear();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            draw_paddle(&mut self.pixels, paddle, &self.font, &self.config);
        }
        for (_e, ball) in self.world.query::<&Ball>().iter() {
            draw_ball(&mut self.pixels, ball);
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        scores(&self.world)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}

/// Helper to create a paddle entity at its side's rest position
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_rest_y());
    let paddle = Paddle::new(
        side,
        pos,
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
    );
    world.spawn((paddle, controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
