//! Micro Arcade entry point
//!
//! Runs either simulation headless for a fixed number of frames against
//! the recording surface and logs what happened. Real hosts implement the
//! `Surface`/`AudioSink` collaborators over their own canvas and speakers.

use glam::Vec2;

use micro_arcade::audio::NullAudio;
use micro_arcade::circles::World;
use micro_arcade::invaders::Game;
use micro_arcade::render::Recorder;
use micro_arcade::{KeyState, Tuning, runner};

/// Ten seconds at 60 Hz
const DEMO_TICKS: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let which = args.next().unwrap_or_else(|| "circles".to_string());

    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Some(tuning) => tuning,
            None => return,
        },
        None => Tuning::default(),
    };

    match which.as_str() {
        "circles" => {
            let mut world = World::from_tuning(&tuning);
            let mut surface = Recorder::new();
            log::info!(
                "bouncing circles: {} profile, {} lines, {}x{}",
                tuning.profile.as_str(),
                world.lines.len(),
                tuning.width,
                tuning.height
            );
            runner::run_circles(&mut world, &mut surface, DEMO_TICKS);
            log::info!(
                "after {DEMO_TICKS} frames: {} circles live, {} draw ops recorded",
                world.circles.len(),
                surface.ops.len()
            );
        }
        "invaders" => {
            let mut game = Game::new(Vec2::new(tuning.width, tuning.height), 12345);
            let mut surface = Recorder::new();
            let mut audio = NullAudio;
            log::info!("space invaders: {} bodies, seed {}", game.bodies.len(), game.seed);
            runner::run_invaders(
                &mut game,
                KeyState::default,
                &mut surface,
                &mut audio,
                DEMO_TICKS,
            );
            log::info!(
                "after {DEMO_TICKS} frames: {} bodies live, {} draw ops recorded",
                game.bodies.len(),
                surface.ops.len()
            );
        }
        other => {
            log::error!("unknown simulation {other:?} (expected \"circles\" or \"invaders\")");
        }
    }
}

fn load_tuning(path: &str) -> Option<Tuning> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            log::error!("cannot read tuning file {path}: {err}");
            return None;
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => Some(tuning),
        Err(err) => {
            log::error!("bad tuning file {path}: {err}");
            None
        }
    }
}
