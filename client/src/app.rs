//! Frame-by-frame session driver
//!
//! One struct owns the whole game: the simulation world, its resources, and
//! the session state machine. Every screen, including the game-over prompt,
//! is a state inside the same single-threaded frame loop.

use game_core::{
    reset_match, spawn_entities, step, Arena, Config, Events, GameRng, InputQueue, Score, Session,
    SessionState, SpeedupState, Time,
};
use hecs::World;
use tracing::info;

use crate::audio::SoundBank;
use crate::{input, render};

pub struct App {
    world: World,
    time: Time,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    input_queue: InputQueue,
    speedup: SpeedupState,
    rng: GameRng,
    session: Session,
    sounds: SoundBank,
    exit: bool,
}

impl App {
    pub fn new(seed: u64, sounds: SoundBank) -> Self {
        let arena = Arena::new();
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        spawn_entities(&mut world, &arena, &config, &mut rng);

        let session = Session::new(config.match_duration);

        Self {
            world,
            time: Time::new(1.0 / 60.0, 0.0),
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            speedup: SpeedupState::new(),
            rng,
            session,
            sounds,
            exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Poll input, advance the simulation, fire sound cues
    pub fn frame(&mut self, dt: f32) {
        match self.session.state() {
            SessionState::SelectingPlayer => {
                if let Some(slot) = input::player_choice() {
                    self.session.select(slot, self.time.now);
                    info!(?slot, "player selected, session started");
                }
            }
            SessionState::Playing => {
                // Input only reaches the chosen paddle; the other never moves
                if let Some(slot) = self.session.player() {
                    self.input_queue.push_input(slot.index(), input::paddle_dir());
                }

                self.time.dt = dt;
                step(
                    &mut self.world,
                    &mut self.time,
                    &self.arena,
                    &self.config,
                    &mut self.score,
                    &mut self.events,
                    &mut self.input_queue,
                    &mut self.speedup,
                );
                self.sounds.play(&self.events);

                if self.session.tick(self.time.now) {
                    info!(p1 = self.score.p1, p2 = self.score.p2, "time up");
                }
            }
            SessionState::GameOver => match input::restart_choice() {
                Some(true) => {
                    reset_match(
                        &mut self.world,
                        &self.arena,
                        &self.config,
                        &mut self.score,
                        &mut self.speedup,
                        &mut self.rng,
                    );
                    self.session.restart();
                    info!("restarting");
                }
                Some(false) => {
                    self.exit = true;
                    info!("exiting");
                }
                None => {}
            },
        }
    }

    pub fn draw(&self) {
        match self.session.state() {
            SessionState::SelectingPlayer => render::draw_select_screen(&self.config),
            SessionState::Playing => render::draw_playing(
                &self.world,
                &self.config,
                &self.score,
                self.session.remaining(self.time.now),
            ),
            SessionState::GameOver => render::draw_game_over(&self.config, &self.score),
        }
    }
}
