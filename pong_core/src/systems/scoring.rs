use crate::{Ball, Config, Events, Exit, RandomSource};
use hecs::World;

/// Reset the ball once it has left the field horizontally
///
/// No score is kept: the reset is the only visible effect of a point.
pub fn check_out_of_bounds(
    world: &mut World,
    config: &Config,
    rng: &mut impl RandomSource,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exit = if ball.pos.x < 0.0 {
            Exit::Left
        } else if ball.pos.x + config.ball_size > config.field_width {
            Exit::Right
        } else {
            continue;
        };

        ball.reset(config, rng);
        events.reset = Some(exit);

        tracing::debug!(?exit, vx = ball.vel.x, vy = ball.vel.y, "ball left field, served again");
    }
}
