mod app;
mod audio;
mod input;
mod render;

use macroquad::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use app::App;
use audio::SoundBank;
use game_core::Params;

fn window_conf() -> Conf {
    Conf {
        window_title: "2D Catch Ball Game".to_owned(),
        window_width: Params::ARENA_WIDTH as i32,
        window_height: Params::ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sounds = match SoundBank::load().await {
        Ok(sounds) => sounds,
        Err(err) => {
            error!("failed to load sound assets: {err:#}");
            std::process::exit(1);
        }
    };

    let seed = macroquad::miniquad::date::now() as u64;
    let mut app = App::new(seed, sounds);

    // Window close quits from any state; "N" on the game-over prompt exits
    while !app.should_exit() {
        app.frame(get_frame_time());
        app.draw();
        next_frame().await;
    }
}
