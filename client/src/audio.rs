//! Sound cues for collision events
//!
//! Playback is fire-and-forget; nothing waits for a cue to finish.

use anyhow::{anyhow, Result};
use game_core::Events;
use macroquad::audio::{load_sound, play_sound_once, Sound};

const CATCH_SOUND: &str = "client/assets/catch.wav";
const WALL_HIT_SOUND: &str = "client/assets/wall_hit.wav";

pub struct SoundBank {
    catch: Sound,
    wall_hit: Sound,
}

impl SoundBank {
    /// Load both cues up front. A missing asset is a fatal startup error.
    pub async fn load() -> Result<Self> {
        let catch = load_sound(CATCH_SOUND)
            .await
            .map_err(|e| anyhow!("loading {CATCH_SOUND}: {e}"))?;
        let wall_hit = load_sound(WALL_HIT_SOUND)
            .await
            .map_err(|e| anyhow!("loading {WALL_HIT_SOUND}: {e}"))?;
        Ok(Self { catch, wall_hit })
    }

    /// Map this frame's simulation events to cues
    pub fn play(&self, events: &Events) {
        if events.any_catch() {
            play_sound_once(&self.catch);
        }
        if events.ball_hit_wall {
            play_sound_once(&self.wall_hit);
        }
    }
}
