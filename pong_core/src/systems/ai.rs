use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the opponent paddle toward the ball's current height
///
/// Purely reactive: no trajectory prediction. Inside the dead zone around the
/// target the paddle holds still, which keeps it from jittering once aligned.
pub fn move_opponent(world: &mut World, config: &Config) {
    let target = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center_y(config));

    let Some(target) = target else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let center = paddle.center_y(config);
        if center < target - config.ai_dead_zone {
            paddle.y += config.ai_speed;
        } else if center > target + config.ai_dead_zone {
            paddle.y -= config.ai_speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, find_paddle};
    use glam::Vec2;

    /// Opponent centered at 300; ball placed so its center sits at `ball_center`
    fn setup_world(ball_center: f32) -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Opponent, &config);
        let y = ball_center - config.ball_size / 2.0;
        create_ball(&mut world, Vec2::new(400.0, y), Vec2::new(7.0, 0.0));
        (world, config)
    }

    fn opponent_y(world: &World) -> f32 {
        find_paddle(world, Side::Opponent).unwrap().y
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        for ball_center in [290.0, 295.0, 300.0, 305.0, 310.0] {
            let (mut world, config) = setup_world(ball_center);
            move_opponent(&mut world, &config);
            assert_eq!(
                opponent_y(&world),
                config.paddle_spawn_y(),
                "Should hold for ball center {ball_center}"
            );
        }
    }

    #[test]
    fn test_moves_down_toward_lower_ball() {
        let (mut world, config) = setup_world(311.0);
        move_opponent(&mut world, &config);
        assert_eq!(opponent_y(&world), config.paddle_spawn_y() + config.ai_speed);
    }

    #[test]
    fn test_moves_up_toward_higher_ball() {
        let (mut world, config) = setup_world(150.0);
        move_opponent(&mut world, &config);
        assert_eq!(opponent_y(&world), config.paddle_spawn_y() - config.ai_speed);
    }

    #[test]
    fn test_clamps_at_bottom() {
        let (mut world, config) = setup_world(590.0);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.y = config.field_height - config.paddle_height - 1.0;
        }

        move_opponent(&mut world, &config);

        assert_eq!(opponent_y(&world), config.field_height - config.paddle_height);
    }

    #[test]
    fn test_ignores_human_paddle() {
        let (mut world, config) = setup_world(50.0);
        create_paddle(&mut world, Side::Human, &config);

        move_opponent(&mut world, &config);

        let human = find_paddle(&world, Side::Human).unwrap();
        assert_eq!(human.y, config.paddle_spawn_y());
    }

    #[test]
    fn test_no_ball_is_a_no_op() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Opponent, &config);

        move_opponent(&mut world, &config);

        assert_eq!(opponent_y(&world), config.paddle_spawn_y());
    }
}
