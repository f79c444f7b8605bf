pub mod aabb;
pub mod components;
pub mod config;
pub mod driver;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use aabb::*;
pub use components::*;
pub use config::*;
pub use driver::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// One game session: two paddles and a ball, plus the rules they play under
pub struct GameState {
    pub world: World,
    pub events: Events,
    config: Config,
}

impl GameState {
    /// Centered paddles and a centered ball with a random serve
    pub fn new(config: Config, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        create_paddle(&mut world, Side::Human, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        let ball = Ball::serve(&config, rng);
        create_ball(&mut world, ball.pos, ball.vel);

        tracing::info!(
            width = config.field_width,
            height = config.field_height,
            vx = ball.vel.x,
            vy = ball.vel.y,
            "game session created"
        );

        Ok(Self {
            world,
            events: Events::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        find_paddle(&self.world, side)
    }

    pub fn ball(&self) -> Option<Ball> {
        find_ball(&self.world)
    }

    pub fn set_paddle_target(&mut self, side: Side, y: f32) {
        set_paddle_target(&mut self.world, side, y, &self.config);
    }

    pub fn set_paddle_intent(&mut self, side: Side, dir: i8) {
        set_paddle_intent(&mut self.world, side, dir);
    }
}

/// Run one frame of the deterministic Pong simulation
pub fn step_frame(state: &mut GameState, rng: &mut impl RandomSource) {
    let GameState {
        world,
        events,
        config,
    } = state;

    // Clear events at start of frame
    events.clear();

    // 0. Held keyboard input
    move_paddles(world, config);

    // 1. Integrate
    move_ball(world);

    // 2. Top/bottom walls
    check_walls(world, config, events);

    // 3-4. Paddles; a hit forces the ball away from that paddle
    check_paddle_hit(world, Side::Human, config, rng, events);
    check_paddle_hit(world, Side::Opponent, config, rng, events);

    // 5. Ball left the field: serve again from the center
    check_out_of_bounds(world, config, rng, events);

    // 6. Opponent reacts to where the ball is now
    move_opponent(world, config);
}

/// Helper to create a centered paddle entity in its lane
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_x(side), config.paddle_spawn_y());
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}

pub fn find_ball(world: &World) -> Option<Ball> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)
}
