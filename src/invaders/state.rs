//! Bodies and game state for the invaders game

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// What a body is, with its variant-specific fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    Invader {
        /// Current offset within the bounded side-to-side sweep
        patrol_x: f32,
        /// Signed horizontal speed; flips at the ends of the sweep
        speed_x: f32,
    },
    Player,
    Bullet {
        /// Added to the center every tick
        velocity: Vec2,
    },
}

/// Any simulated entity: a position, a bounding box, and a kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: u32,
    pub center: Vec2,
    /// Full width/height of the axis-aligned bounding box
    pub size: Vec2,
    pub kind: BodyKind,
}

impl Body {
    pub fn invader(id: u32, center: Vec2) -> Self {
        Self {
            id,
            center,
            size: Vec2::splat(INVADER_SIZE),
            kind: BodyKind::Invader {
                patrol_x: 0.0,
                speed_x: INVADER_SPEED_X,
            },
        }
    }

    pub fn player(id: u32, dimensions: Vec2) -> Self {
        Self {
            id,
            center: Vec2::new(dimensions.x / 2.0, dimensions.y - PLAYER_SIZE * 2.0),
            size: Vec2::splat(PLAYER_SIZE),
            kind: BodyKind::Player,
        }
    }

    pub fn bullet(id: u32, center: Vec2, velocity: Vec2) -> Self {
        Self {
            id,
            center,
            size: Vec2::splat(BULLET_SIZE),
            kind: BodyKind::Bullet { velocity },
        }
    }
}

/// True if two bodies overlap. Five rejection clauses; if none holds, the
/// bodies are colliding. A body never collides with itself.
pub fn colliding(b1: &Body, b2: &Body) -> bool {
    !(b1.id == b2.id
        || b1.center.x + b1.size.x / 2.0 < b2.center.x - b2.size.x / 2.0
        || b1.center.y + b1.size.y / 2.0 < b2.center.y - b2.size.y / 2.0
        || b1.center.x - b1.size.x / 2.0 > b2.center.x + b2.size.x / 2.0
        || b1.center.y - b1.size.y / 2.0 > b2.center.y + b2.size.y / 2.0)
}

/// Events surfaced to the host for side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The player fired a bullet this tick; the host restarts and plays
    /// the shoot sound
    ShotFired,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    /// All active bodies; order is iteration order for update and draw
    pub bodies: Vec<Body>,
    pub dimensions: Vec2,
    /// Per-tick probability that an unblocked invader fires
    pub shoot_chance: f32,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl Game {
    /// New game: 24 invaders in an 8x3 grid plus the player
    pub fn new(dimensions: Vec2, seed: u64) -> Self {
        let mut game = Self {
            bodies: Vec::new(),
            dimensions,
            shoot_chance: INVADER_SHOOT_CHANCE,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        for i in 0..INVADER_COUNT {
            let x = INVADER_GRID_ORIGIN + (i % INVADER_COLS) as f32 * INVADER_GRID_STEP;
            let y = INVADER_GRID_ORIGIN + (i % INVADER_ROWS) as f32 * INVADER_GRID_STEP;
            let id = game.next_entity_id();
            game.bodies.push(Body::invader(id, Vec2::new(x, y)));
        }

        let id = game.next_entity_id();
        game.bodies.push(Body::player(id, dimensions));

        game
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
