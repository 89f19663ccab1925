use glam::Vec2;
use hecs::World;

use crate::arena::Arena;
use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, Score};

/// Reflect the ball off the arena edges.
///
/// Each contact negates exactly one axis and clamps the position back inside,
/// so the same contact cannot flip the sign twice on later frames.
pub fn bounce_walls(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let half = config.ball_half();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - half <= 0.0 || ball.pos.x + half >= arena.width {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = ball.pos.x.clamp(half, arena.width - half);
            events.ball_hit_wall = true;
        }

        if ball.pos.y - half <= 0.0 || ball.pos.y + half >= arena.height {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = ball.pos.y.clamp(half, arena.height - half);
            events.ball_hit_wall = true;
        }
    }
}

/// Check the ball against each paddle independently.
///
/// A catch negates both velocity components (a deliberate simplification, not
/// realistic physics), increments that paddle's counter, and separates the
/// ball along the axis of least penetration so one contact reflects once.
pub fn check_catches(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    // Collect ball and paddle data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.x))
        .collect();

    let ball_half = config.ball_half();
    let paddle_half_width = config.paddle_width / 2.0;
    let paddle_half_height = config.paddle_height / 2.0;
    let paddle_y = config.paddle_y();
    let mut caught = false;

    for (player_id, paddle_x) in paddles {
        let dx = (ball_pos.x - paddle_x).abs();
        let dy = (ball_pos.y - paddle_y).abs();
        let overlap_x = paddle_half_width + ball_half - dx;
        let overlap_y = paddle_half_height + ball_half - dy;

        if overlap_x > 0.0 && overlap_y > 0.0 {
            ball_vel = -ball_vel;

            // Push the ball out along the shallower axis
            if overlap_y <= overlap_x {
                let dir = if ball_pos.y < paddle_y { -1.0 } else { 1.0 };
                ball_pos.y += dir * overlap_y;
            } else {
                let dir = if ball_pos.x < paddle_x { -1.0 } else { 1.0 };
                ball_pos.x += dir * overlap_x;
            }

            score.increment(player_id);
            events.mark_catch(player_id);
            caught = true;
        }
    }

    if caught {
        write_ball(world, ball_pos, ball_vel);
    }
}

fn write_ball(world: &mut World, pos: Vec2, vel: Vec2) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Arena, Config, Score, Events) {
        (
            World::new(),
            Arena::new(),
            Config::new(),
            Score::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (mut world, arena, config, _score, mut events) = setup();
        let half = config.ball_half();
        create_ball(
            &mut world,
            Vec2::new(arena.width - half + 1.0, 300.0),
            Vec2::new(180.0, 180.0),
        );

        bounce_walls(&mut world, &arena, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(-180.0, 180.0), "only X flips");
            assert!(
                ball.pos.x + half <= arena.width,
                "ball pushed back inside"
            );
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, arena, config, _score, mut events) = setup();
        let half = config.ball_half();
        create_ball(
            &mut world,
            Vec2::new(400.0, half - 1.0),
            Vec2::new(180.0, -180.0),
        );

        bounce_walls(&mut world, &arena, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(180.0, 180.0), "only Y flips");
            assert!(ball.pos.y - half >= 0.0);
        }
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_corner_contact_flips_both_axes_once() {
        let (mut world, arena, config, _score, mut events) = setup();
        let half = config.ball_half();
        create_ball(
            &mut world,
            Vec2::new(half - 1.0, half - 1.0),
            Vec2::new(-180.0, -180.0),
        );

        bounce_walls(&mut world, &arena, &config, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(180.0, 180.0));
        }
    }

    #[test]
    fn test_no_bounce_in_open_field() {
        let (mut world, arena, config, _score, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(180.0, 180.0));

        bounce_walls(&mut world, &arena, &config, &mut events);

        assert!(!events.ball_hit_wall);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, Vec2::new(180.0, 180.0));
        }
    }

    #[test]
    fn test_catch_reflects_both_components_and_scores() {
        let (mut world, _arena, config, mut score, mut events) = setup();
        create_paddle(&mut world, 0, 200.0);
        create_paddle(&mut world, 1, 600.0);

        // Ball dropping onto player 1's paddle from above, overlapping by 2.5 px
        let vel = Vec2::new(180.0, 180.0);
        create_ball(&mut world, Vec2::new(200.0, config.paddle_y() - 10.0), vel);

        check_catches(&mut world, &config, &mut score, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel, -vel, "both components negated exactly once");
            assert!(
                !ball.bounds(&config).intersects(&Paddle::new(0, 200.0).bounds(&config)),
                "ball separated from the paddle"
            );
        }
        assert_eq!(score.p1, 1);
        assert_eq!(score.p2, 0, "other paddle untouched");
        assert!(events.p1_caught);
        assert!(!events.p2_caught);
    }

    #[test]
    fn test_catch_by_player_two() {
        let (mut world, _arena, config, mut score, mut events) = setup();
        create_paddle(&mut world, 0, 200.0);
        create_paddle(&mut world, 1, 600.0);
        create_ball(
            &mut world,
            Vec2::new(600.0, config.paddle_y() - 10.0),
            Vec2::new(-180.0, 180.0),
        );

        check_catches(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.p2, 1);
        assert_eq!(score.p1, 0);
        assert!(events.p2_caught);
    }

    #[test]
    fn test_no_catch_when_ball_clear_of_paddles() {
        let (mut world, _arena, config, mut score, mut events) = setup();
        create_paddle(&mut world, 0, 200.0);
        create_paddle(&mut world, 1, 600.0);
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(180.0, 180.0));

        check_catches(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.p1, 0);
        assert_eq!(score.p2, 0);
        assert!(!events.any_catch());
    }
}
