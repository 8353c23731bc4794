//! Shared segment and reflection math
//!
//! The plain vector operations (distance, magnitude, dot product, unit
//! vector) come straight from [`glam::Vec2`]; this module holds the two
//! pieces both simulations lean on: closest point on a finite segment and
//! velocity reflection about a contact normal.

use glam::Vec2;

/// Closest point on the segment from `end1` to `end2` to an external `point`.
///
/// Projects the vector from `end1` to `point` onto the segment direction.
/// A projection at or before `end1` clamps to `end1`; at or past `end2`
/// clamps to `end2`; anything in between interpolates along the segment.
pub fn closest_point_on_segment(end1: Vec2, end2: Vec2, point: Vec2) -> Vec2 {
    let segment = end2 - end1;
    let length = segment.length();
    if length <= f32::EPSILON {
        // degenerate segment, both ends coincide
        return end1;
    }
    let direction = segment / length;

    let projection = (point - end1).dot(direction);
    if projection <= 0.0 {
        end1
    } else if projection >= length {
        end2
    } else {
        end1 + direction * projection
    }
}

/// Reflect `velocity` about the unit-length `normal`: `v' = v - 2(v·n)n`.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
