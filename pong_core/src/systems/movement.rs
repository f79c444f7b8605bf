use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed;

            // Clamp to field bounds
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
