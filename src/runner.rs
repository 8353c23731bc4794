//! Caller-owned frame loop
//!
//! Instead of re-registering a callback with a host frame scheduler, the
//! loop is explicit: tick, draw, then wait out the rest of the frame
//! budget.

use std::time::{Duration, Instant};

use crate::audio::{AudioSink, SoundCue};
use crate::circles::World;
use crate::input::KeyState;
use crate::invaders::{self, Game, GameEvent};
use crate::render::{self, Surface};

/// Frames per second the loop paces itself to
pub const FRAME_RATE: f32 = 60.0;

/// Paces a loop to a fixed frame budget
pub struct FrameClock {
    budget: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: f32) -> Self {
        let budget = Duration::from_secs_f32(1.0 / frame_rate);
        Self {
            budget,
            deadline: Instant::now() + budget,
        }
    }

    /// Suspend until the next frame is due. After an overrun the deadline
    /// rebases instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        }
        self.deadline += self.budget;
        let now = Instant::now();
        if self.deadline < now {
            self.deadline = now + self.budget;
        }
    }
}

/// Run the bouncing-circles world for `ticks` frames
pub fn run_circles(world: &mut World, surface: &mut impl Surface, ticks: u64) {
    let mut clock = FrameClock::new(FRAME_RATE);
    for _ in 0..ticks {
        world.update();
        render::draw_world(world, surface);
        clock.wait();
    }
}

/// Run the invaders game for `ticks` frames.
///
/// `poll_keys` is queried once per tick; events coming out of the update
/// are mapped onto the audio sink. The loop does not start until the sink
/// reports its assets ready.
pub fn run_invaders(
    game: &mut Game,
    mut poll_keys: impl FnMut() -> KeyState,
    surface: &mut impl Surface,
    audio: &mut impl AudioSink,
    ticks: u64,
) {
    while !audio.ready() {
        std::thread::sleep(Duration::from_millis(10));
    }

    let mut clock = FrameClock::new(FRAME_RATE);
    for _ in 0..ticks {
        let keys = poll_keys();
        for event in invaders::update(game, &keys) {
            match event {
                GameEvent::ShotFired => audio.play(SoundCue::PlayerShoot),
            }
        }
        render::draw_game(game, surface);
        clock.wait();
    }
}
