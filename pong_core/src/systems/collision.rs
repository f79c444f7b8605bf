use crate::{Aabb, Ball, Config, Events, Paddle, RandomSource, Side};
use glam::Vec2;
use hecs::World;

/// Reflect the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let max_y = config.field_height - config.ball_size;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= config.field_height {
            ball.vel.y = -ball.vel.y;
            // Clamp position so the ball cannot sink past the wall
            ball.pos.y = ball.pos.y.clamp(0.0, max_y);
            events.wall_bounce = true;

            tracing::debug!(y = ball.pos.y, vy = ball.vel.y, "ball bounced off wall");
        }
    }
}

/// Bounce the ball off one paddle if their boxes overlap
///
/// The ball always leaves the human paddle moving right and the opponent
/// paddle moving left, whatever its previous direction. The new vertical
/// speed grows with the distance between the ball's center and the paddle's
/// center, plus a small random jitter.
pub fn check_paddle_hit(
    world: &mut World,
    side: Side,
    config: &Config,
    rng: &mut impl RandomSource,
    events: &mut Events,
) {
    // Collect paddle data without holding a borrow on the world
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p);

    let Some(paddle) = paddle else {
        return; // No paddle on this side
    };

    let paddle_box = Aabb::from_corner_size(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(config.paddle_width, config.paddle_height),
    );

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_box = Aabb::from_corner_size(ball.pos, Vec2::splat(config.ball_size));
        if !ball_box.overlaps(&paddle_box) {
            continue;
        }

        ball.vel.x = match side {
            Side::Human => ball.vel.x.abs(),
            Side::Opponent => -ball.vel.x.abs(),
        };

        let offset = ball.center_y(config) - paddle.center_y(config);
        ball.vel.y = offset * config.deflection_factor + rng.symmetric() * config.hit_jitter;

        match side {
            Side::Human => events.human_hit = true,
            Side::Opponent => events.opponent_hit = true,
        }

        tracing::debug!(?side, offset, vx = ball.vel.x, vy = ball.vel.y, "ball hit paddle");
    }
}
