pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run the deterministic Catch Ball simulation for one frame
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    speedup: &mut SpeedupState,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events accumulate across micro-steps so the client never misses a cue
    events.clear();

    // Inputs are per-frame; drain once so intents persist across micro-steps
    ingest_inputs(world, input_queue);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Move the controlled paddle
        move_paddles(world, &step_time, arena, config);

        // 2. Move ball
        move_ball(world, &step_time);

        // 3. Reflect off the arena edges
        bounce_walls(world, arena, config, events);

        // 4. Check ball vs both paddles, scoring catches
        check_catches(world, config, score, events);

        // 5. Escalate ball speed on 5-point crossings
        apply_speedup(world, score, speedup, config);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, x: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, x), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles at their quarter-line positions plus a freshly
/// served ball
pub fn spawn_entities(world: &mut World, arena: &Arena, config: &Config, rng: &mut GameRng) {
    create_paddle(world, 0, config.paddle_spawn_x(0));
    create_paddle(world, 1, config.paddle_spawn_x(1));

    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(config.ball_axis_speed, arena, rng);
    create_ball(world, ball.pos, ball.vel);
}

/// Reset everything a restart touches: scores, boost level, paddle
/// positions, and the ball serve. Scores reset together by design.
pub fn reset_match(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    speedup: &mut SpeedupState,
    rng: &mut GameRng,
) {
    score.reset();
    speedup.reset();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.x = config.paddle_spawn_x(paddle.player_id);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.ball_axis_speed, arena, rng);
    }
}
