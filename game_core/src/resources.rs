/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Catch counters for both players
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player_id: u8) {
        if player_id == 0 {
            self.p1 += 1;
        } else {
            self.p2 += 1;
        }
    }

    pub fn get(&self, player_id: u8) -> u32 {
        if player_id == 0 {
            self.p1
        } else {
            self.p2
        }
    }

    /// Both counters reset together
    pub fn reset(&mut self) {
        self.p1 = 0;
        self.p2 = 0;
    }

    /// Completed 5-point thresholds across both players, drives the speedup
    pub fn boost_level(&self, boost_every: u32) -> u32 {
        self.p1 / boost_every + self.p2 / boost_every
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame, mapped to sound cues by the client
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub p1_caught: bool,
    pub p2_caught: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.p1_caught = false;
        self.p2_caught = false;
    }

    pub fn any_catch(&self) -> bool {
        self.p1_caught || self.p2_caught
    }

    pub fn mark_catch(&mut self, player_id: u8) {
        if player_id == 0 {
            self.p1_caught = true;
        } else {
            self.p2_caught = true;
        }
    }
}

/// Queued paddle inputs for this frame
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(u8, i8)>, // (player_id, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.inputs.push((player_id, dir));
    }
}

/// Last applied boost level, so each 5-point crossing scales the ball once
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedupState {
    pub level: u32,
}

impl SpeedupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }
}
