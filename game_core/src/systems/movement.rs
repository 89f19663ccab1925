use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Time;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, arena: &Arena, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * config.paddle_speed * time.dt;
            paddle.x += delta;

            // Clamp to arena bounds
            paddle.x = arena.clamp_x(paddle.x, config.paddle_width / 2.0);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_right_and_clamps() {
        let mut world = World::new();
        let arena = Arena::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, 780.0);
        world
            .insert_one(entity, PaddleIntent { dir: 1 })
            .unwrap();

        let time = Time::new(1.0, 0.0); // one full second, way past the edge
        move_paddles(&mut world, &time, &arena, &config);

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(
            paddle.x,
            arena.width - config.paddle_width / 2.0,
            "paddle clamps at the right edge"
        );
    }

    #[test]
    fn test_paddle_without_intent_stays_put() {
        let mut world = World::new();
        let arena = Arena::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, 200.0);

        let time = Time::new(0.016, 0.0);
        move_paddles(&mut world, &time, &arena, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().x, 200.0);
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let entity = create_ball(
            &mut world,
            Vec2::new(400.0, 300.0),
            Vec2::new(180.0, -180.0),
        );

        let time = Time::new(0.5, 0.0);
        move_ball(&mut world, &time);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(490.0, 210.0));
        assert_eq!(ball.vel, Vec2::new(180.0, -180.0), "velocity unchanged");
    }
}
