//! Micro Arcade - two tiny fixed-timestep arcade simulations
//!
//! Core modules:
//! - `circles`: bouncing-circles toy (gravity, spinning lines, reflection)
//! - `invaders`: Space Invaders-style game (patrols, bullets, AABB collisions)
//! - `geom`: shared segment/reflection math
//! - `render`/`input`/`audio`: collaborator seams for the host platform
//! - `runner`: caller-owned frame loop

pub mod audio;
pub mod circles;
pub mod geom;
pub mod input;
pub mod invaders;
pub mod profile;
pub mod render;
pub mod runner;

pub use input::KeyState;
pub use profile::{PhysicsProfile, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (host refresh is ~60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;

    // === Bouncing circles ===

    pub const CIRCLE_RADIUS: f32 = 5.0;
    /// Circles spawn just above the top edge of the visible area
    pub const CIRCLE_SPAWN_Y: f32 = -5.0;
    /// Minimum gap between circle spawns, in simulated milliseconds
    pub const CIRCLE_SPAWN_INTERVAL_MS: f32 = 400.0;
    pub const LINE_LENGTH: f32 = 70.0;
    /// Degrees added to every line's angle each tick
    pub const LINE_ROTATE_SPEED: f32 = 0.5;
    /// Bail out of the bounce clearing loop after this many motion steps
    pub const MAX_BOUNCE_STEPS: u32 = 64;

    // === Space invaders ===

    pub const INVADER_SIZE: f32 = 15.0;
    pub const INVADER_SPEED_X: f32 = 0.3;
    /// Patrol offset sweeps between 0 and this value before reversing
    pub const INVADER_PATROL_RANGE: f32 = 30.0;
    /// Per-tick probability that an unblocked invader fires
    pub const INVADER_SHOOT_CHANCE: f32 = 0.005;
    pub const INVADER_COUNT: u32 = 24;
    pub const INVADER_COLS: u32 = 8;
    pub const INVADER_ROWS: u32 = 3;
    pub const INVADER_GRID_ORIGIN: f32 = 30.0;
    pub const INVADER_GRID_STEP: f32 = 30.0;
    pub const INVADER_BULLET_FALL_SPEED: f32 = 2.0;
    pub const PLAYER_SIZE: f32 = 15.0;
    pub const PLAYER_SPEED_X: f32 = 2.0;
    pub const PLAYER_BULLET_RISE_SPEED: f32 = -7.0;
    pub const BULLET_SIZE: f32 = 3.0;
}
