//! Per-tick update for the invaders game

use glam::Vec2;
use rand::Rng;

use super::state::{Body, BodyKind, Game, GameEvent, colliding};
use crate::consts::*;
use crate::input::KeyState;

/// Advance the game by one tick.
///
/// Every body colliding with at least one other body is removed first and
/// never updated or drawn again; the survivors then update in order.
/// Bullets spawned this tick join the list at the end and first act next
/// tick. Returned events carry the side effects the host must perform.
pub fn update(game: &mut Game, keys: &KeyState) -> Vec<GameEvent> {
    let survivors: Vec<Body> = game
        .bodies
        .iter()
        .filter(|&body| !game.bodies.iter().any(|other| colliding(body, other)))
        .copied()
        .collect();
    game.bodies = survivors;

    let mut spawned: Vec<Body> = Vec::new();
    let mut events: Vec<GameEvent> = Vec::new();

    for i in 0..game.bodies.len() {
        let body = game.bodies[i];
        match body.kind {
            BodyKind::Invader { patrol_x, speed_x } => {
                // reverse at the ends of the sweep
                let speed_x = if !(0.0..=INVADER_PATROL_RANGE).contains(&patrol_x) {
                    -speed_x
                } else {
                    speed_x
                };

                if game.rng.random::<f32>() < game.shoot_chance
                    && !invaders_below(&game.bodies, &body)
                {
                    let drift = game.rng.random::<f32>() - 0.5;
                    let id = game.next_entity_id();
                    spawned.push(Body::bullet(
                        id,
                        Vec2::new(body.center.x, body.center.y + body.size.y / 2.0),
                        Vec2::new(drift, INVADER_BULLET_FALL_SPEED),
                    ));
                }

                let invader = &mut game.bodies[i];
                invader.center.x += speed_x;
                invader.kind = BodyKind::Invader {
                    patrol_x: patrol_x + speed_x,
                    speed_x,
                };
            }

            BodyKind::Player => {
                if keys.left {
                    game.bodies[i].center.x -= PLAYER_SPEED_X;
                } else if keys.right {
                    game.bodies[i].center.x += PLAYER_SPEED_X;
                }

                if keys.shoot {
                    let Body { center, size, .. } = game.bodies[i];
                    let id = game.next_entity_id();
                    spawned.push(Body::bullet(
                        id,
                        Vec2::new(center.x, center.y - size.y - 10.0),
                        Vec2::new(0.0, PLAYER_BULLET_RISE_SPEED),
                    ));
                    events.push(GameEvent::ShotFired);
                }
            }

            BodyKind::Bullet { velocity } => {
                game.bodies[i].center += velocity;
            }
        }
    }

    game.bodies.extend(spawned);

    // bullets are never culled off-screen; keep the leak observable
    let live_bullets = game
        .bodies
        .iter()
        .filter(|b| matches!(b.kind, BodyKind::Bullet { .. }))
        .count();
    log::trace!("{live_bullets} bullets in flight");

    events
}

/// True if at least one other invader patrols the same column somewhere
/// below `invader`, blocking its shot
fn invaders_below(bodies: &[Body], invader: &Body) -> bool {
    bodies.iter().any(|other| {
        matches!(other.kind, BodyKind::Invader { .. })
            && (invader.center.x - other.center.x).abs() < other.size.x
            && other.center.y > invader.center.y
    })
}
