use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Score, SpeedupState};

/// Scale the ball 1.1x for each newly completed 5-point threshold.
///
/// The boost is edge-triggered on the combined level, so sitting on a
/// multiple of 5 does not compound the multiplier frame after frame. Each
/// axis magnitude is capped so late-game play stays winnable.
pub fn apply_speedup(world: &mut World, score: &Score, state: &mut SpeedupState, config: &Config) {
    let level = score.boost_level(config.boost_every);
    if level <= state.level {
        return;
    }

    let factor = config.speed_boost.powi((level - state.level) as i32);
    let cap = config.ball_axis_speed_max;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel *= factor;
        ball.vel.x = ball.vel.x.clamp(-cap, cap);
        ball.vel.y = ball.vel.y.clamp(-cap, cap);
    }

    state.level = level;
}
