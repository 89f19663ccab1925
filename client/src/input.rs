//! Keyboard input handling

use game_core::PlayerSlot;
use macroquad::prelude::*;

/// Held paddle direction: Left/Right arrows, -1/0/+1
pub fn paddle_dir() -> i8 {
    let mut dir = 0;
    if is_key_down(KeyCode::Left) {
        dir -= 1;
    }
    if is_key_down(KeyCode::Right) {
        dir += 1;
    }
    dir
}

/// Selection screen: "1" or "2" picks a slot
pub fn player_choice() -> Option<PlayerSlot> {
    if is_key_pressed(KeyCode::Key1) {
        Some(PlayerSlot::One)
    } else if is_key_pressed(KeyCode::Key2) {
        Some(PlayerSlot::Two)
    } else {
        None
    }
}

/// Game-over prompt: "Y" restarts, "N" exits
pub fn restart_choice() -> Option<bool> {
    if is_key_pressed(KeyCode::Y) {
        Some(true)
    } else if is_key_pressed(KeyCode::N) {
        Some(false)
    } else {
        None
    }
}
