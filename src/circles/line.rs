//! Spinning line geometry
//!
//! A line is center + length + angle; its endpoints are derived, never
//! stored. The angle accumulates without wrapping since it is only
//! consumed through trig.

use glam::Vec2;

use crate::consts::{LINE_LENGTH, LINE_ROTATE_SPEED};
use crate::geom::closest_point_on_segment;
use crate::profile::PhysicsProfile;

/// A rotating line segment
#[derive(Debug, Clone)]
pub struct Line {
    pub center: Vec2,
    /// Full segment length
    pub length: f32,
    /// Current rotation in degrees
    pub angle: f32,
    /// Degrees added per tick
    pub rotate_speed: f32,
}

impl Line {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            length: LINE_LENGTH,
            angle: 0.0,
            rotate_speed: LINE_ROTATE_SPEED,
        }
    }

    /// Advance the rotation by one tick
    pub fn rotate(&mut self) {
        self.angle += self.rotate_speed;
    }

    /// The two endpoints, `center ± direction * length/2`
    pub fn endpoints(&self, profile: PhysicsProfile) -> (Vec2, Vec2) {
        let theta = (self.angle + profile.direction_offset()).to_radians();
        let half = Vec2::new(theta.cos(), theta.sin()) * (self.length / 2.0);
        (self.center + half, self.center - half)
    }

    /// Closest point on this segment to `point`
    pub fn closest_point(&self, point: Vec2, profile: PhysicsProfile) -> Vec2 {
        let (end1, end2) = self.endpoints(profile);
        closest_point_on_segment(end1, end2, point)
    }

    /// True when a circle at `center` with `radius` overlaps this line
    pub fn intersects_circle(&self, center: Vec2, radius: f32, profile: PhysicsProfile) -> bool {
        self.closest_point(center, profile).distance(center) < radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: PhysicsProfile = PhysicsProfile::Classic;

    #[test]
    fn test_endpoints_horizontal_at_zero_angle() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        let (end1, end2) = line.endpoints(PROFILE);
        assert!((end1 - Vec2::new(135.0, 100.0)).length() < 1e-4);
        assert!((end2 - Vec2::new(65.0, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_endpoints_vertical_under_scaled_profile() {
        // the -90 degree offset turns an angle-zero line vertical
        let line = Line::new(Vec2::new(100.0, 100.0));
        let (end1, end2) = line.endpoints(PhysicsProfile::Scaled);
        assert!((end1.x - 100.0).abs() < 1e-3);
        assert!((end2.x - 100.0).abs() < 1e-3);
        assert!((end1.y - end2.y).abs() > 69.0);
    }

    #[test]
    fn test_rotation_accumulates_unbounded() {
        let mut line = Line::new(Vec2::ZERO);
        for _ in 0..1000 {
            line.rotate();
        }
        assert!((line.angle - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_intersection_at_clearance() {
        // perpendicular distance from the segment >= radius reports false
        let line = Line::new(Vec2::new(100.0, 100.0));
        assert!(!line.intersects_circle(Vec2::new(100.0, 105.0), 5.0, PROFILE));
        assert!(!line.intersects_circle(Vec2::new(100.0, 110.0), 5.0, PROFILE));
        // well off the end of the segment
        assert!(!line.intersects_circle(Vec2::new(145.0, 100.0), 5.0, PROFILE));
    }

    #[test]
    fn test_intersection_when_penetrating() {
        let line = Line::new(Vec2::new(100.0, 100.0));
        assert!(line.intersects_circle(Vec2::new(100.0, 103.0), 5.0, PROFILE));
        // past the endpoint but within radius of the end cap
        assert!(line.intersects_circle(Vec2::new(138.0, 100.0), 5.0, PROFILE));
    }

    #[test]
    fn test_closest_point_tracks_rotation() {
        let mut line = Line::new(Vec2::new(0.0, 0.0));
        // rotate to 90 degrees: segment becomes vertical
        for _ in 0..180 {
            line.rotate();
        }
        let closest = line.closest_point(Vec2::new(10.0, 20.0), PROFILE);
        assert!(closest.x.abs() < 1e-3);
        assert!((closest.y - 20.0).abs() < 1e-3);
    }
}
