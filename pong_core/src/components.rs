use glam::Vec2;

use crate::{Config, RandomSource};

/// Which lane a paddle occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,    // Left lane, pointer/keyboard controlled
    Opponent, // Right lane, reactive controller
}

/// Paddle component - a vertically movable rectangle in a fixed lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after spawn
    pub y: f32, // Top edge (clamped to field)
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left of bounding box
    pub vel: Vec2, // Units per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Spawn a centered ball with a random serve
    pub fn serve(config: &Config, rng: &mut impl RandomSource) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with random direction
    pub fn reset(&mut self, config: &Config, rng: &mut impl RandomSource) {
        self.pos = config.ball_spawn();

        let dir = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.ball_speed * dir,
            config.ball_speed * rng.symmetric(),
        );
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceRng;

    #[test]
    fn test_reset_serves_right_on_high_sample() {
        let config = Config::new();
        // 0.75 -> rightward, 0.75 -> vy = 7 * 0.5
        let mut rng = SequenceRng::new(vec![0.75]);
        let ball = Ball::serve(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::new(7.0, 3.5));
    }

    #[test]
    fn test_reset_serves_left_on_low_sample() {
        let config = Config::new();
        let mut rng = SequenceRng::new(vec![0.25, 0.0]);
        let mut ball = Ball::new(Vec2::new(-30.0, 100.0), Vec2::new(-7.0, 2.0));
        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn test_reset_treats_exact_half_as_left() {
        let config = Config::new();
        let mut rng = SequenceRng::new(vec![0.5]);
        let ball = Ball::serve(&config, &mut rng);
        assert_eq!(ball.vel.x, -config.ball_speed);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_center_helpers() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Human, 20.0, 100.0);
        let ball = Ball::new(Vec2::new(50.0, 143.0), Vec2::ZERO);
        assert_eq!(paddle.center_y(&config), 150.0);
        assert_eq!(ball.center_y(&config), 150.0);
    }
}
