use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_y_offset: f32,
    pub ball_size: f32,
    pub ball_axis_speed: f32,
    pub ball_axis_speed_max: f32,
    pub speed_boost: f32,
    pub boost_every: u32,
    pub match_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_y_offset: Params::PADDLE_Y_OFFSET,
            ball_size: Params::BALL_SIZE,
            ball_axis_speed: Params::BALL_AXIS_SPEED,
            ball_axis_speed_max: Params::BALL_AXIS_SPEED_MAX,
            speed_boost: Params::SPEED_BOOST,
            boost_every: Params::BOOST_EVERY,
            match_duration: Params::MATCH_DURATION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y centerline shared by both paddles, near the bottom edge
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_y_offset
    }

    /// Spawn X position for a paddle based on player ID
    pub fn paddle_spawn_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.arena_width / 4.0 // Player 1, left quarter
        } else {
            3.0 * self.arena_width / 4.0 // Player 2, right quarter
        }
    }

    /// Clamp paddle X so the whole rectangle stays inside the arena
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        let half_width = self.paddle_width / 2.0;
        x.clamp(half_width, self.arena_width - half_width)
    }

    /// Half extent of the square ball
    pub fn ball_half(&self) -> f32 {
        self.ball_size / 2.0
    }
}
