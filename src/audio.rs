//! Audio collaborator
//!
//! A single sound asset exists: the player's shot. Hosts load it up
//! front; the runner polls `ready` before the first tick so the loop
//! never starts against a half-loaded asset.

/// Sound cues the simulations can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// The player fired a bullet
    PlayerShoot,
}

/// Host-provided audio backend
pub trait AudioSink {
    /// True once every asset has finished loading
    fn ready(&self) -> bool;

    /// Play a cue, restarting it from the beginning if it is already
    /// playing
    fn play(&mut self, cue: SoundCue);
}

/// Fallback sink for headless runs or a missing asset: always ready,
/// swallows every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn ready(&self) -> bool {
        true
    }

    fn play(&mut self, _cue: SoundCue) {}
}
