//! Immediate-mode drawing for each session screen

use game_core::{Ball, Config, Paddle, Score};
use hecs::World;
use macroquad::prelude::*;

const FONT_SIZE: f32 = 28.0;

fn paddle_color(player_id: u8) -> Color {
    if player_id == 0 {
        RED
    } else {
        BLUE
    }
}

/// Selection screen prompt
pub fn draw_select_screen(config: &Config) {
    clear_background(WHITE);
    draw_text(
        "Press 1 for Player 1 (Red)",
        config.arena_width / 4.0,
        config.arena_height / 3.0,
        FONT_SIZE,
        BLACK,
    );
    draw_text(
        "Press 2 for Player 2 (Blue)",
        config.arena_width / 4.0,
        config.arena_height / 2.0,
        FONT_SIZE,
        BLACK,
    );
}

/// Active play: entities plus the HUD
pub fn draw_playing(world: &World, config: &Config, score: &Score, remaining: f32) {
    clear_background(WHITE);

    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        let bounds = paddle.bounds(config);
        draw_rectangle(
            bounds.min.x,
            bounds.min.y,
            config.paddle_width,
            config.paddle_height,
            paddle_color(paddle.player_id),
        );
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        let bounds = ball.bounds(config);
        draw_rectangle(
            bounds.min.x,
            bounds.min.y,
            config.ball_size,
            config.ball_size,
            RED,
        );
    }

    draw_text(
        &format!("Player 1: {}  Player 2: {}", score.p1, score.p2),
        config.arena_width / 3.0,
        30.0,
        FONT_SIZE,
        BLACK,
    );
    draw_text(
        &format!("{:>3.0}s", remaining.ceil()),
        config.arena_width - 70.0,
        30.0,
        FONT_SIZE,
        BLACK,
    );
}

/// Game-over prompt with the final scores
pub fn draw_game_over(config: &Config, score: &Score) {
    clear_background(WHITE);
    draw_text(
        &format!("Final - Player 1: {}  Player 2: {}", score.p1, score.p2),
        config.arena_width / 4.0,
        config.arena_height / 4.0,
        FONT_SIZE,
        BLACK,
    );
    draw_text(
        "Game Over! Do you want to play again? (Y/N)",
        config.arena_width / 4.0,
        config.arena_height / 3.0,
        FONT_SIZE,
        BLACK,
    );
}
