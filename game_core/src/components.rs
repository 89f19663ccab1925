use glam::Vec2;

use crate::arena::{Aabb, Arena};
use crate::config::Config;
use crate::resources::GameRng;

/// Paddle component - a player-controlled horizontal rectangle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = player 1, 1 = player 2
    pub x: f32,        // X center (clamped to arena)
}

impl Paddle {
    pub fn new(player_id: u8, x: f32) -> Self {
        Self { player_id, x }
    }

    /// Collision rectangle; both paddles share the Y centerline from config
    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.x, config.paddle_y()),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}

/// Ball component - a moving square with a velocity vector
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Re-serve from the arena center, each axis independently left/right
    /// and up/down at the base speed
    pub fn reset(&mut self, axis_speed: f32, arena: &Arena, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = arena.ball_spawn();
        let vx = if rng.0.gen_bool(0.5) {
            axis_speed
        } else {
            -axis_speed
        };
        let vy = if rng.0.gen_bool(0.5) {
            axis_speed
        } else {
            -axis_speed
        };
        self.vel = Vec2::new(vx, vy);
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(config.ball_size))
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = left, 0 = stop, 1 = right
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
