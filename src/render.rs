//! Rendering collaborator and draw projections
//!
//! The simulations never touch a real canvas. Each tick they project
//! their state through the [`Surface`] trait; hosts implement it over
//! whatever 2D backend they have. [`Recorder`] captures the draw ops for
//! headless runs and tests.
//!
//! Drawing is read-only over simulation state.

use glam::Vec2;

use crate::circles::World;
use crate::invaders::Game;

/// Minimal 2D drawing surface over the visible-area coordinate space
pub trait Surface {
    /// Erase the previous frame across the full visible area
    fn clear(&mut self);

    /// Filled disk
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Stroked segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2);

    /// Filled rectangle centered on `center` with full extents `size`
    fn fill_rect(&mut self, center: Vec2, size: Vec2);
}

/// One recorded drawing primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
    Rect { center: Vec2, size: Vec2 },
}

/// Surface that records ops instead of rasterizing them
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn fill_rect(&mut self, center: Vec2, size: Vec2) {
        self.ops.push(DrawOp::Rect { center, size });
    }
}

/// Draw the bouncing-circles world: clear, then disks, then line strokes
pub fn draw_world(world: &World, surface: &mut impl Surface) {
    surface.clear();
    for circle in &world.circles {
        surface.fill_circle(circle.center, circle.radius);
    }
    for line in &world.lines {
        let (end1, end2) = line.endpoints(world.profile);
        surface.stroke_line(end1, end2);
    }
}

/// Draw the invaders game: clear, then every body as a filled rectangle
pub fn draw_game(game: &Game, surface: &mut impl Surface) {
    surface.clear();
    for body in &game.bodies {
        surface.fill_rect(body.center, body.size);
    }
}
