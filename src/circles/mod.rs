//! Bouncing-circles toy
//!
//! Circles drop in from above the visible area, fall under gravity,
//! bounce off a fixed set of spinning lines, and are culled once they
//! leave the screen. Deterministic: fixed timestep, no RNG, stable
//! iteration order, no rendering or platform dependencies.

pub mod line;
pub mod physics;
pub mod world;

pub use line::Line;
pub use world::{Circle, World};
