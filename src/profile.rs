//! Physics profiles and tuning
//!
//! The bouncing-circles toy exists in two slightly different physical
//! renditions that disagree on gravity strength, integration scale, and
//! the line direction formula. They are kept as two named profiles rather
//! than merged; `Classic` is the canonical one.

use serde::{Deserialize, Serialize};

use crate::consts::CIRCLE_SPAWN_INTERVAL_MS;

/// Selectable physics rendition for the bouncing-circles world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PhysicsProfile {
    /// Gravity 0.06/tick, full-velocity integration, line direction taken
    /// straight from the angle
    #[default]
    Classic,
    /// Gravity 2.0/tick with velocity applied at 1/30 scale, line
    /// direction rotated -90 degrees before use
    Scaled,
}

impl PhysicsProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicsProfile::Classic => "Classic",
            PhysicsProfile::Scaled => "Scaled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(PhysicsProfile::Classic),
            "scaled" => Some(PhysicsProfile::Scaled),
            _ => None,
        }
    }

    /// Per-tick increment added to a circle's vertical velocity
    #[inline]
    pub fn gravity(&self) -> f32 {
        match self {
            PhysicsProfile::Classic => 0.06,
            PhysicsProfile::Scaled => 2.0,
        }
    }

    /// Scale applied to velocity when integrating position
    #[inline]
    pub fn velocity_scale(&self) -> f32 {
        match self {
            PhysicsProfile::Classic => 1.0,
            PhysicsProfile::Scaled => 1.0 / 30.0,
        }
    }

    /// Degrees added to a line's angle before deriving its direction
    #[inline]
    pub fn direction_offset(&self) -> f32 {
        match self {
            PhysicsProfile::Classic => 0.0,
            PhysicsProfile::Scaled => -90.0,
        }
    }
}

/// Tuning bundle handed to the binary; round-trips through JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub profile: PhysicsProfile,
    /// Minimum gap between circle spawns, simulated milliseconds
    pub spawn_interval_ms: f32,
    /// Visible-area dimensions shared by both simulations
    pub width: f32,
    pub height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            profile: PhysicsProfile::default(),
            spawn_interval_ms: CIRCLE_SPAWN_INTERVAL_MS,
            width: 400.0,
            height: 400.0,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
