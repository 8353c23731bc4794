//! World state and per-tick update for the bouncing-circles toy

use glam::Vec2;

use super::line::Line;
use super::physics;
use crate::consts::{CIRCLE_RADIUS, CIRCLE_SPAWN_INTERVAL_MS, CIRCLE_SPAWN_Y, TICK_MS};
use crate::profile::PhysicsProfile;
use crate::Tuning;

/// A falling circle
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub center: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            velocity: Vec2::ZERO,
            radius: CIRCLE_RADIUS,
        }
    }

    /// True while the center is within the visible area expanded by the
    /// circle's own radius in each direction
    pub fn in_bounds(&self, dimensions: Vec2) -> bool {
        self.center.x > -self.radius
            && self.center.x < dimensions.x + self.radius
            && self.center.y > -self.radius
            && self.center.y < dimensions.y + self.radius
    }
}

/// The complete bouncing-circles world
#[derive(Debug, Clone)]
pub struct World {
    pub circles: Vec<Circle>,
    /// Fixed after construction; every line spins in place forever
    pub lines: Vec<Line>,
    pub dimensions: Vec2,
    pub profile: PhysicsProfile,
    /// Minimum gap between circle spawns, simulated milliseconds
    pub spawn_interval_ms: f32,
    /// Simulated time, advanced by one tick per update
    elapsed_ms: f32,
    last_spawn_ms: f32,
}

impl World {
    pub fn new(dimensions: Vec2, profile: PhysicsProfile) -> Self {
        Self {
            circles: Vec::new(),
            lines: vec![
                Line::new(Vec2::new(100.0, 100.0)),
                Line::new(Vec2::new(200.0, 100.0)),
                Line::new(Vec2::new(150.0, 150.0)),
                Line::new(Vec2::new(100.0, 200.0)),
                Line::new(Vec2::new(220.0, 200.0)),
            ],
            dimensions,
            profile,
            spawn_interval_ms: CIRCLE_SPAWN_INTERVAL_MS,
            elapsed_ms: 0.0,
            last_spawn_ms: 0.0,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        let mut world = Self::new(Vec2::new(tuning.width, tuning.height), tuning.profile);
        world.spawn_interval_ms = tuning.spawn_interval_ms;
        world
    }

    /// Simulated time since the world was created, milliseconds
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Advance the world by one tick: bounce, fall, cull, spawn, spin.
    pub fn update(&mut self) {
        // reverse index order so removal never skips a circle
        for i in (0..self.circles.len()).rev() {
            let circle = &mut self.circles[i];

            for line in &self.lines {
                if line.intersects_circle(circle.center, circle.radius, self.profile) {
                    physics::bounce_circle(circle, line, self.profile);
                }
            }

            physics::apply_gravity(circle, self.profile);
            physics::move_circle(circle, self.profile);

            if !circle.in_bounds(self.dimensions) {
                self.circles.remove(i);
            }
        }

        self.elapsed_ms += TICK_MS;
        self.spawn_if_due();

        for line in &mut self.lines {
            line.rotate();
        }
    }

    /// Spawn a circle at the horizontal midpoint, just above the top
    /// edge, once the spawn interval has passed
    fn spawn_if_due(&mut self) {
        if self.elapsed_ms - self.last_spawn_ms > self.spawn_interval_ms {
            let spawn = Vec2::new(self.dimensions.x / 2.0, CIRCLE_SPAWN_Y);
            self.circles.push(Circle::new(spawn));
            self.last_spawn_ms = self.elapsed_ms;
            log::debug!(
                "spawned circle at {spawn:?}, {} live",
                self.circles.len()
            );
        }
    }
}
