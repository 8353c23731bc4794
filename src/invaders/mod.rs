//! Space Invaders-style game
//!
//! One flat list of bodies: an 8x3 invader fleet, the player, and
//! whatever bullets are in flight. Each tick removes every body involved
//! in a collision, then lets the survivors update themselves.
//! Deterministic given a seed and an input sequence.

pub mod state;
pub mod tick;

pub use state::{Body, BodyKind, Game, GameEvent, colliding};
pub use tick::update;
