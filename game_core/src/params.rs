/// Game tuning parameters for Catch Ball
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 300.0; // px/s, 5 px per 60 Hz frame
    pub const PADDLE_Y_OFFSET: f32 = 30.0; // paddle centerline above the bottom edge

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_AXIS_SPEED: f32 = 180.0; // px/s per axis, 3 px per 60 Hz frame
    pub const BALL_AXIS_SPEED_MAX: f32 = 1440.0; // cap per axis after boosts

    // Speed escalation
    pub const SPEED_BOOST: f32 = 1.1; // applied once per 5-point crossing
    pub const BOOST_EVERY: u32 = 5;

    // Session
    pub const MATCH_DURATION: f32 = 120.0; // seconds

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
