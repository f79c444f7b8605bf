use hecs::World;

use crate::{Config, Paddle, PaddleIntent, Side};

/// Center a paddle on a pointer coordinate (field-local), clamped to the field
pub fn set_paddle_target(world: &mut World, side: Side, target_y: f32, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y = config.clamp_paddle_y(target_y - config.paddle_height / 2.0);
        }
    }
}

/// Record a held movement direction, applied each frame by `move_paddles`
pub fn set_paddle_intent(world: &mut World, side: Side, dir: i8) {
    let dir = dir.signum();
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, find_paddle};

    fn setup_world() -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Human, &config);
        create_paddle(&mut world, Side::Opponent, &config);
        (world, config)
    }

    #[test]
    fn test_target_centers_paddle() {
        let (mut world, config) = setup_world();
        set_paddle_target(&mut world, Side::Human, 300.0, &config);

        let paddle = find_paddle(&world, Side::Human).unwrap();
        assert_eq!(paddle.y, 250.0);
        assert_eq!(paddle.center_y(&config), 300.0);
    }

    #[test]
    fn test_target_only_moves_requested_side() {
        let (mut world, config) = setup_world();
        set_paddle_target(&mut world, Side::Human, 60.0, &config);

        let opponent = find_paddle(&world, Side::Opponent).unwrap();
        assert_eq!(opponent.y, config.paddle_spawn_y());
    }

    #[test]
    fn test_target_clamps_out_of_range_input() {
        let (mut world, config) = setup_world();

        set_paddle_target(&mut world, Side::Human, -500.0, &config);
        assert_eq!(find_paddle(&world, Side::Human).unwrap().y, 0.0);

        set_paddle_target(&mut world, Side::Human, 10_000.0, &config);
        assert_eq!(
            find_paddle(&world, Side::Human).unwrap().y,
            config.field_height - config.paddle_height
        );
    }

    #[test]
    fn test_target_is_idempotent() {
        let (mut world, config) = setup_world();
        set_paddle_target(&mut world, Side::Human, 123.0, &config);
        let once = find_paddle(&world, Side::Human).unwrap();
        set_paddle_target(&mut world, Side::Human, 123.0, &config);
        let twice = find_paddle(&world, Side::Human).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_intent_is_normalized_to_unit_direction() {
        let (mut world, _config) = setup_world();
        set_paddle_intent(&mut world, Side::Human, 5);

        for (_e, (paddle, intent)) in world.query::<(&Paddle, &PaddleIntent)>().iter() {
            let expected = if paddle.side == Side::Human { 1 } else { 0 };
            assert_eq!(intent.dir, expected);
        }
    }
}
