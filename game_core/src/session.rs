//! Session state machine
//!
//! Drives the screen flow: player selection, timed play, game-over prompt.

/// Which paddle the human controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Entity player_id for this slot
    pub fn index(self) -> u8 {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SelectingPlayer,
    Playing,
    GameOver,
}

/// One play-through until restart: chosen slot plus the countdown clock.
///
/// The clock runs on simulation seconds, so a session is deterministic under
/// a fixed-dt step regardless of the display rate.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    state: SessionState,
    player: Option<PlayerSlot>,
    started_at: f32,
    duration: f32,
}

impl Session {
    pub fn new(duration: f32) -> Self {
        Self {
            state: SessionState::SelectingPlayer,
            player: None,
            started_at: 0.0,
            duration,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn player(&self) -> Option<PlayerSlot> {
        self.player
    }

    /// Pick a slot and start the countdown. Ignored outside `SelectingPlayer`.
    pub fn select(&mut self, slot: PlayerSlot, now: f32) {
        if self.state == SessionState::SelectingPlayer {
            self.player = Some(slot);
            self.started_at = now;
            self.state = SessionState::Playing;
        }
    }

    pub fn elapsed(&self, now: f32) -> f32 {
        now - self.started_at
    }

    pub fn remaining(&self, now: f32) -> f32 {
        (self.duration - self.elapsed(now)).max(0.0)
    }

    /// Advance the clock while `Playing`; returns true on the tick that
    /// crosses the duration and moves the session to `GameOver`.
    pub fn tick(&mut self, now: f32) -> bool {
        if self.state == SessionState::Playing && self.elapsed(now) >= self.duration {
            self.state = SessionState::GameOver;
            return true;
        }
        false
    }

    /// Back to the selection screen. The caller resets scores and entities.
    pub fn restart(&mut self) {
        self.state = SessionState::SelectingPlayer;
        self.player = None;
        self.started_at = 0.0;
    }
}
